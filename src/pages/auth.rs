use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::ui::{
    Alert, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, CardVariant, Input, Label,
};
use crate::route::Route;
use crate::state::auth_form::{AuthAction, AuthForm, AuthMode, SubmitOutcome};

#[allow(non_snake_case)]
#[component]
pub fn Login() -> Element {
    rsx! { AuthPage { initial: AuthMode::Login } }
}

#[allow(non_snake_case)]
#[component]
pub fn Register() -> Element {
    rsx! { AuthPage { initial: AuthMode::Register } }
}

#[allow(non_snake_case)]
#[component]
pub fn AuthPage(initial: AuthMode) -> Element {
    let mut form = use_signal(|| AuthForm::new(initial));
    let nav = navigator();

    let f = form.read().clone();
    let mode = f.mode;
    let input_type = f.input_type();
    let visibility_icon = if f.show_password {
        IconKind::EyeOff
    } else {
        IconKind::Eye
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-background p-4",
            div { class: "w-full max-w-md animate-zoom-in",
                Card { variant: CardVariant::Glass, class: "relative border-border/50 bg-card/80 backdrop-blur-sm shadow-xl",
                    CardHeader { class: "space-y-1",
                        div { class: "flex items-center justify-between",
                            if matches!(mode, AuthMode::Recovery { .. }) {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Icon,
                                    class: "absolute left-4",
                                    onclick: move |_| {
                                        form.write().apply(AuthAction::BackToLogin);
                                    },
                                    Icon { kind: IconKind::ArrowLeft, class: "h-4 w-4" }
                                }
                            }
                            CardTitle { class: "text-2xl font-bold text-center w-full", "{mode.title()}" }
                        }
                        CardDescription { class: "text-center", "{mode.description()}" }
                    }
                    CardContent {
                        form {
                            key: "{mode.key()}",
                            class: "space-y-4 animate-fade-up",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                let outcome = form.write().submit();
                                if let SubmitOutcome::Redirect(path) = outcome {
                                    nav.push(path);
                                }
                            },

                            if let Some(err) = f.error {
                                Alert { destructive: true, "{err}" }
                            }

                            if f.recovery_sent() {
                                div { class: "text-center space-y-4",
                                    div { class: "p-2 bg-primary/10 rounded-full w-12 h-12 mx-auto flex items-center justify-center",
                                        Icon { kind: IconKind::Mail, class: "h-6 w-6 text-primary" }
                                    }
                                    h3 { class: "font-medium text-lg", "Email enviado!" }
                                    p { class: "text-muted-foreground",
                                        "Verifique sua caixa de entrada para instruções de recuperação de senha."
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        class: "w-full",
                                        onclick: move |_| {
                                            form.write().apply(AuthAction::BackToLogin);
                                        },
                                        "Voltar para o login"
                                    }
                                }
                            } else {
                                if mode == AuthMode::Register {
                                    div { class: "space-y-2",
                                        Label { html_for: "fullName", "Nome Completo" }
                                        div { class: "relative",
                                            Icon { kind: IconKind::User, class: "absolute left-3 top-2.5 h-5 w-5 text-muted-foreground" }
                                            Input {
                                                id: "fullName",
                                                placeholder: "Seu nome completo",
                                                class: "pl-10",
                                                value: f.full_name.clone(),
                                                oninput: move |evt: FormEvent| form.write().full_name = evt.value(),
                                            }
                                        }
                                    }
                                }

                                div { class: "space-y-2",
                                    Label { html_for: "email", "Email" }
                                    div { class: "relative",
                                        Icon { kind: IconKind::Mail, class: "absolute left-3 top-2.5 h-5 w-5 text-muted-foreground" }
                                        Input {
                                            id: "email",
                                            input_type: "email",
                                            placeholder: "seu@email.com",
                                            class: "pl-10",
                                            value: f.email.clone(),
                                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                                        }
                                    }
                                }

                                if !matches!(mode, AuthMode::Recovery { .. }) {
                                    div { class: "space-y-2",
                                        Label { html_for: "password", "Senha" }
                                        div { class: "relative",
                                            Icon { kind: IconKind::Lock, class: "absolute left-3 top-2.5 h-5 w-5 text-muted-foreground" }
                                            Input {
                                                id: "password",
                                                input_type,
                                                placeholder: "••••••••",
                                                class: "pl-10",
                                                value: f.password.clone(),
                                                oninput: move |evt: FormEvent| form.write().password = evt.value(),
                                            }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                size: ButtonSize::Icon,
                                                class: "absolute right-1 top-0",
                                                onclick: move |_| form.write().toggle_password_visibility(),
                                                Icon { kind: visibility_icon, class: "h-5 w-5 text-muted-foreground" }
                                            }
                                        }
                                    }
                                }

                                if mode == AuthMode::Register {
                                    div { class: "space-y-2",
                                        Label { html_for: "confirmPassword", "Confirmar Senha" }
                                        div { class: "relative",
                                            Icon { kind: IconKind::Lock, class: "absolute left-3 top-2.5 h-5 w-5 text-muted-foreground" }
                                            Input {
                                                id: "confirmPassword",
                                                input_type,
                                                placeholder: "••••••••",
                                                class: "pl-10",
                                                value: f.confirm_password.clone(),
                                                oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                                            }
                                        }
                                    }
                                }

                                if mode == AuthMode::Login {
                                    div { class: "text-right",
                                        Button {
                                            variant: ButtonVariant::Link,
                                            class: "p-0 h-auto text-sm",
                                            onclick: move |_| {
                                                form.write().apply(AuthAction::ShowRecovery);
                                            },
                                            "Esqueci minha senha"
                                        }
                                    }
                                }

                                Button { button_type: "submit", class: "w-full bg-primary hover:bg-primary/90", "{mode.submit_label()}" }
                            }
                        }
                    }
                    CardFooter { class: "flex flex-col space-y-4",
                        {
                            match mode {
                                AuthMode::Login => rsx! {
                                    div { class: "flex items-center justify-center space-x-1 w-full",
                                        span { class: "text-muted-foreground", "Não tem uma conta?" }
                                        Button {
                                            variant: ButtonVariant::Link,
                                            class: "p-0 h-auto",
                                            onclick: move |_| {
                                                form.write().apply(AuthAction::ShowRegister);
                                            },
                                            "Criar Conta"
                                        }
                                    }
                                },
                                AuthMode::Register => rsx! {
                                    div { class: "flex items-center justify-center space-x-1 w-full",
                                        span { class: "text-muted-foreground", "Já tem uma conta?" }
                                        Button {
                                            variant: ButtonVariant::Link,
                                            class: "p-0 h-auto",
                                            onclick: move |_| {
                                                form.write().apply(AuthAction::BackToLogin);
                                            },
                                            "Entrar"
                                        }
                                    }
                                },
                                AuthMode::Recovery { .. } => rsx!( Fragment {} ),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "w-full",
                            onclick: move |_| {
                                nav.push(Route::Landing {});
                            },
                            "Voltar para a página inicial"
                        }
                    }
                }
            }
        }
    }
}
