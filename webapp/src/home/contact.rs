use dioxus::prelude::*;
use tracing::info;

use crate::common::{icons::channel_icon, relay::Relay, use_site};
use crate::components::{
    heading::SectionHeading,
    notification::{Snackbar, arm_dismissal},
    reveal::Reveal,
};
use site::{
    contact::{ContactForm, Field, Outcome},
    notify::Notifier,
};

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    field: Field,
    contact_form: Signal<ContactForm>,
    invalid: bool,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let field = props.field;
    let mut contact_form = props.contact_form;

    let id = format!("contact-{}", field.key());
    let value = contact_form.read().get(field).to_owned();

    rsx! {
        div { class: if props.invalid { "field invalid" } else { "field" },
            label { r#for: "{id}", "{field.label()} *" }
            if field == Field::Message {
                textarea {
                    id: "{id}",
                    name: field.key(),
                    rows: "6",
                    required: true,
                    value: "{value}",
                    oninput: move |evt: FormEvent| contact_form.write().set(field, evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    name: field.key(),
                    r#type: if field == Field::Email { "email" } else { "text" },
                    required: true,
                    value: "{value}",
                    oninput: move |evt: FormEvent| contact_form.write().set(field, evt.value()),
                }
            }
            if props.invalid {
                span { class: "field-error", "{field} is required" }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let profile = &site.portfolio.profile;
    let delay_ms = site.config.notification_ms;

    let mut contact_form = use_signal(ContactForm::new);
    let mut missing = use_signal(Vec::<Field>::new);
    let mut sending = use_signal(|| false);
    let mut notifier = use_signal(Notifier::new);
    let relay = use_hook(|| Relay::from_config(&site.config));

    let channels = profile.channels();

    rsx! {
        section { id: "contact", class: "section alt",
            div { class: "container",
                Reveal {
                    SectionHeading { copy: site.portfolio.contact.clone() }
                }

                div { class: "contact-layout",
                    div {
                        h3 { "Contact Information" }
                        div { class: "channels",
                            for (i, channel) in channels.into_iter().enumerate() {
                                Reveal { key: "{channel.title}", delay_ms: i as u32 * 100,
                                    a {
                                        class: "channel",
                                        href: "{channel.link}",
                                        target: channel.is_external().then_some("_blank"),
                                        rel: channel.is_external().then_some("noopener noreferrer"),
                                        div { class: "card slide",
                                            span { class: "badge", "{channel_icon(channel.kind)}" }
                                            div {
                                                p { class: "muted", "{channel.title}" }
                                                p { class: "value", "{channel.value}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Reveal {
                        div { class: "card form-card",
                            h3 { "Send a Message" }
                            form {
                                class: "form-stack",
                                onsubmit: move |evt: FormEvent| {
                                    evt.prevent_default();
                                    let relay = relay.clone();
                                    async move {
                                        if sending() {
                                            return;
                                        }

                                        // work on copies so nothing is borrowed across the await
                                        let mut draft = contact_form.peek().clone();
                                        let mut board = notifier.peek().clone();
                                        sending.set(true);
                                        let outcome = draft.submit_into(&relay, &mut board).await;
                                        sending.set(false);

                                        match outcome {
                                            Outcome::Missing(fields) => missing.set(fields),
                                            Outcome::Sent(ticket) => {
                                                info!("contact form accepted");
                                                contact_form.set(draft);
                                                missing.set(Vec::new());
                                                notifier.set(board);
                                                arm_dismissal(notifier, ticket, delay_ms);
                                            }
                                            Outcome::Failed(ticket) => {
                                                notifier.set(board);
                                                arm_dismissal(notifier, ticket, delay_ms);
                                            }
                                        }
                                    }
                                },

                                for field in Field::ALL {
                                    FormField {
                                        key: "{field.key()}",
                                        field,
                                        contact_form,
                                        invalid: missing.read().contains(&field) && contact_form.read().get(field).is_empty(),
                                    }
                                }

                                button {
                                    class: "btn btn-accent",
                                    r#type: "submit",
                                    disabled: sending(),
                                    if sending() { "Sending…" } else { "Send Message ➤" }
                                }
                            }
                        }
                    }
                }
            }

            Snackbar { notifier }
        }
    }
}
