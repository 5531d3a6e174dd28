use yew::prelude::*;

use crate::routes::Page;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub page_id: String,
    pub on_navigate: Callback<String>,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let back_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home.id());
        })
    };

    html! {
        <div class="not-found-page">
            <h2>{"Nothing here yet"}</h2>
            <p>{format!("We couldn't find a page called \"{}\".", props.page_id)}</p>
            <a href={format!("#{}", Page::Home.id())} onclick={back_home}>
                {"Take me home"}
            </a>
            <style>
                {r#"
                .not-found-page {
                    min-height: 60vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 8rem 1.5rem 4rem;
                }
                .not-found-page p {
                    opacity: 0.7;
                }
                .not-found-page a {
                    color: #eab308;
                }
                "#}
            </style>
        </div>
    }
}
