use dioxus::prelude::*;

use crate::api;
use crate::router::Route;
use crate::session;

#[component]
pub fn Login() -> Element {
    let session = session::use_session();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        async move {
            match api::login(&username(), &password()).await {
                Ok(response) => {
                    session::log_in(session, response);
                    navigator.push(Route::Home {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    };

    rsx! {
        section { class: "auth-form",
            h1 { "Log in" }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            form { onsubmit: submit,
                label {
                    "Username"
                    input {
                        value: "{username}",
                        oninput: move |event| username.set(event.value()),
                    }
                }
                label {
                    "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |event| password.set(event.value()),
                    }
                }
                button { r#type: "submit", "Log in" }
            }
            p {
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
