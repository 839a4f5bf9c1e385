use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::api::send_contact;
use crate::contact::form::{ContactForm, Field, SubmitStatus, ValidationMode};
use crate::hooks::use_reveal::{revealed, use_reveal};
use crate::reveal::RevealConfig;

pub const SECTION_ID: &str = "contact";

const REVEAL: RevealConfig = RevealConfig::new(0.5).hold_on_small_viewport();

fn input_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn field_error(form: &ContactForm, field: Field) -> Html {
    match form.field_errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_node_ref();
    let reveal = use_reveal(SECTION_ID, section.clone(), REVEAL);
    let visible = reveal.section_visible;
    let form = use_state(ContactForm::default);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            if next.set_field(field, input_value(&e)) {
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut pending = (*form).clone();
            let Some(request) = pending.begin_submit(ValidationMode::Strict) else {
                form.set(pending);
                return;
            };
            form.set(pending.clone());

            let form = form.clone();
            spawn_local(async move {
                let outcome = send_contact(&request).await;
                if let Err(message) = &outcome {
                    log::warn!("Contact submission failed: {}", message);
                }
                // Fields were frozen while submitting, so `pending` is still current.
                pending.finish(outcome);
                form.set(pending);
            });
        })
    };

    let send_another = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.send_another();
            form.set(next);
        })
    };

    let submitting = form.is_submitting();

    let form_body = if form.status == SubmitStatus::Submitted {
        html! {
            <div class="contact-success">
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for reaching out. I'll respond soon!"}</p>
                <button class="btn btn-primary" onclick={send_another}>{"Send Another Message"}</button>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                if let Some(error) = form.error_message.as_ref() {
                    <p class="form-error">{error.clone()}</p>
                }

                <div class={classes!("form-field", "reveal", "reveal-right", "delay-500", revealed(visible))}>
                    <label for="name">{"Name"}</label>
                    <input
                        id="name"
                        name="name"
                        placeholder="Your full name"
                        value={form.name.clone()}
                        oninput={on_input(Field::Name)}
                        disabled={submitting}
                    />
                    { field_error(&form, Field::Name) }
                </div>

                <div class={classes!("form-field", "reveal", "reveal-right", "delay-700", revealed(visible))}>
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="your@email.com"
                        value={form.email.clone()}
                        oninput={on_input(Field::Email)}
                        disabled={submitting}
                    />
                    { field_error(&form, Field::Email) }
                </div>

                <div class={classes!("form-field", "reveal", "reveal-right", "delay-900", revealed(visible))}>
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        placeholder="Tell me about your project or idea..."
                        value={form.message.clone()}
                        oninput={on_input(Field::Message)}
                        disabled={submitting}
                    />
                    { field_error(&form, Field::Message) }
                </div>

                <div class={classes!("reveal", "reveal-right", "delay-1100", revealed(visible))}>
                    <button type="submit" class="btn btn-primary btn-block" disabled={submitting}>
                        if submitting {
                            <>
                                <span class="spinner"></span>
                                {"Sending..."}
                            </>
                        } else {
                            <>
                                <i class="icon-send"></i>
                                {"Send Message"}
                            </>
                        }
                    </button>
                </div>
            </form>
        }
    };

    html! {
        <section ref={section} id={SECTION_ID} class="contact-section">
            <div class="section-grid">
                <div class={classes!("contact-intro", "reveal", "reveal-left", revealed(visible))}>
                    <h2>{"Get In Touch"}</h2>
                    <div class={classes!("section-rule", "delay-300", revealed(visible))}></div>
                    <p class={classes!("reveal", "reveal-up", "delay-500", revealed(visible))}>
                        {"I'm always excited to collaborate on new projects or help bring ideas to life. \
                          Whether you have a project in mind or simply want to connect, I'd love to hear from you."}
                    </p>
                    <p class={classes!("reveal", "reveal-up", "delay-700", revealed(visible))}>
                        {"I build modern, responsive and scalable web applications, from personal sites \
                          to startup MVPs, and I'm available for freelance work and consulting."}
                    </p>
                </div>

                <div class={classes!("contact-card", "reveal", "reveal-right", "delay-300", revealed(visible))}>
                    <div class="contact-card-header">
                        <h3>{"Contact Me"}</h3>
                        <p>{"Send me a message and I'll get back to you as soon as possible."}</p>
                    </div>
                    { form_body }
                </div>
            </div>
        </section>
    }
}
