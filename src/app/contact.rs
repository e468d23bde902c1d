use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::{EmailConfig, SiteConfig};
use crate::contact::{ContactForm, Field, FieldErrors, Notice, SubmitStatus};

const SUCCESS_MESSAGE: &str = "Your message has been sent successfully! I'll get back to you soon.";

/// Signals a submission reports back into.
#[derive(Clone, Copy)]
struct Submission {
    form: RwSignal<ContactForm>,
    status: RwSignal<SubmitStatus>,
    submitting: WriteSignal<bool>,
}

#[cfg(feature = "hydrate")]
fn submit(form: ContactForm, email: EmailConfig, attempt: u64, submission: Submission) {
    use std::time::Duration;

    submission.submitting.set(true);
    leptos::task::spawn_local(async move {
        match crate::contact::send(&form, &email).await {
            Ok(()) => {
                submission.status.update(|s| s.finish(attempt, Notice::Sent));
                submission.form.set(ContactForm::default());
                set_timeout(
                    move || submission.status.update(|s| s.expire(attempt)),
                    Duration::from_secs(5),
                );
            }
            Err(e) => {
                log::error!("sending contact message: {e}");
                submission
                    .status
                    .update(|s| s.finish(attempt, Notice::Failed(e.user_message())));
            }
        }
        submission.submitting.set(false);
    });
}

#[cfg(not(feature = "hydrate"))]
fn submit(_form: ContactForm, _email: EmailConfig, _attempt: u64, _submission: Submission) {}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone => "tel",
        _ => "text",
    }
}

fn column_class(field: Field) -> &'static str {
    match field {
        Field::Name | Field::Email => "col-md-6",
        _ => "col-12",
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let email = expect_context::<SiteConfig>().email;
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(SubmitStatus::default());
    let (submitting, set_submitting) = signal(false);
    let submission = Submission {
        form,
        status,
        submitting: set_submitting,
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(invalid) = current.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::default());
        let mut attempt = 0;
        status.update(|s| attempt = s.begin());
        submit(current, email.clone(), attempt, submission);
    };

    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            let class = move || {
                if errors.with(|e| e.is_invalid(field)) {
                    "form-control is-invalid"
                } else {
                    "form-control"
                }
            };
            let value = move || form.with(|f| f.value(field).to_string());
            let on_input = move |ev: leptos::ev::Event| {
                form.update(|f| f.set(field, event_target_value(&ev)));
            };
            let control = match field {
                Field::Message => view! {
                    <textarea
                        id=field.id()
                        name=field.id()
                        rows="5"
                        class=class
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                .into_any(),
                _ => view! {
                    <input
                        type=input_type(field)
                        id=field.id()
                        name=field.id()
                        class=class
                        prop:value=value
                        on:input=on_input
                    />
                }
                .into_any(),
            };

            view! {
                <div class=column_class(field)>
                    <label for=field.id() class="form-label">{field.label()}</label>
                    {control}
                    <div class="invalid-feedback">{move || errors.with(|e| e.get(field))}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <Title text="Contact" />
        <section class="container py-5 mt-4">
            <h1 class="text-center mb-5">"Contact Me"</h1>
            <div class="mx-auto" style="max-width: 42rem;">
                {move || match status.with(SubmitStatus::notice) {
                    Notice::Sent => Some(view! {
                        <div id="success-message" class="alert alert-success mb-4" role="alert">
                            {SUCCESS_MESSAGE}
                        </div>
                    }.into_any()),
                    Notice::Failed(message) => Some(view! {
                        <div id="error-message" class="alert alert-danger mb-4" role="alert">
                            {message}
                        </div>
                    }.into_any()),
                    Notice::Hidden => None,
                }}
                <form id="contactForm" novalidate=true on:submit=on_submit>
                    <div class="row g-3">{fields}</div>
                    <button type="submit" class="btn btn-primary mt-4" disabled=submitting>
                        {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
