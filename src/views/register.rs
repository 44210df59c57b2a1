use dioxus::prelude::*;

use crate::api;
use crate::router::Route;

#[component]
pub fn Register() -> Element {
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        async move {
            match api::register(&username(), &email(), &password()).await {
                Ok(_) => {
                    navigator.push(Route::Login {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    };

    rsx! {
        section { class: "auth-form",
            h1 { "Register" }
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
                    "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
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
                button { r#type: "submit", "Create account" }
            }
            p {
                "Already registered? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
