use chrono::Datelike;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub studio_name: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <h3>{&props.studio_name}</h3>
            <p class="copyright">
                {format!("© {} {}. All Rights Reserved.", year, props.studio_name)}
            </p>
            <style>
                {r#"
                .site-footer {
                    padding: 2.5rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                }
                .site-footer h3 {
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }
                .copyright {
                    opacity: 0.6;
                }
                "#}
            </style>
        </footer>
    }
}
