use std::rc::Rc;

use yew::prelude::*;
use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config;
use crate::contact_form::{ContactForm, Field, FormAction, FormFields, SubmitStatus, STATUS_RESET_MS};

const SERVICES: [&str; 7] = [
    "Wedding Photography",
    "Portrait Photography",
    "Event Photography",
    "Corporate Photography",
    "Videography",
    "Photo Editing",
    "Other",
];

const WHY_CHOOSE_ME: [(&str, &str); 4] = [
    (
        "Fresh Creative Vision",
        "Bringing new perspectives and modern techniques to capture your moments in \
         unique, compelling ways.",
    ),
    (
        "Personal Attention",
        "As a dedicated photographer, I work closely with each client to understand \
         your vision and exceed expectations.",
    ),
    (
        "Passionate Commitment",
        "Every project receives my full attention and enthusiasm, ensuring \
         exceptional results you'll treasure.",
    ),
    (
        "Competitive Rates",
        "High-quality photography services at accessible rates, with transparent \
         pricing and genuine value.",
    ),
];

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Serialize)]
struct ContactRequest<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    message: &'a str,
}

async fn send_message(fields: &FormFields) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(&ContactRequest {
            name: &fields.name,
            email: &fields.email,
            phone: &fields.phone,
            service: &fields.service,
            message: &fields.message,
        })
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("server responded with status {}", response.status()))
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let is_visible = use_state(|| false);
    // Pending revert-to-idle timer; dropping the handle cancels it, so a
    // component teardown can never mutate state afterwards.
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(50, move || is_visible.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let edit_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let edit_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, textarea.value()));
        })
    };

    let edit_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Service, select.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // At most one in-flight submission; the button is also disabled
            // while submitting.
            if form.is_submitting() {
                return;
            }
            let fields = form.fields.clone();
            form.dispatch(FormAction::Begin);
            *reset_timer.borrow_mut() = None;

            let form = form.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                match send_message(&fields).await {
                    Ok(()) => {
                        form.dispatch(FormAction::Completed);
                    }
                    Err(err) => {
                        log!("Contact form submission failed:", err);
                        form.dispatch(FormAction::Failed);
                    }
                }

                let timer = {
                    let form = form.clone();
                    Timeout::new(STATUS_RESET_MS, move || {
                        form.dispatch(FormAction::ResetStatus);
                    })
                };
                *reset_timer.borrow_mut() = Some(timer);
            });
        })
    };

    let reveal = |base: &'static str| {
        classes!(base, (*is_visible).then(|| "revealed"))
    };

    let contact_cards = [
        (
            "\u{1f4de}",
            "Phone",
            config::site::PHONE_DISPLAY,
            "Mon-Fri 9AM-6PM AEST",
            Some(config::site::PHONE_HREF),
        ),
        (
            "\u{2709}\u{fe0f}",
            "Email",
            config::site::EMAIL,
            "I'll respond within 24 hours",
            Some(config::site::EMAIL_HREF),
        ),
        (
            "\u{1f4cd}",
            "Location",
            config::site::LOCATION,
            "Serving Sydney & beyond",
            Some(config::site::LOCATION_MAP),
        ),
        ("\u{23f1}", "Response Time", "24 Hours", "Average response time", None),
    ];

    html! {
        <section class="contact-section">
            <style>
                {r#".contact-section {
                    position: relative;
                    width: 100%;
                    padding: 5rem 1rem;
                    background: linear-gradient(to bottom, #000, #111827, #000);
                }
                .contact-inner {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .contact-block {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .contact-block.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .contact-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .contact-eyebrow {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    color: #4ade80;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }
                .contact-header h2 {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    font-weight: 900;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .contact-header h2 span {
                    background: linear-gradient(to right, #4ade80, #3b82f6, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .contact-header p {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .contact-cards {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                @media (min-width: 768px) {
                    .contact-cards { grid-template-columns: 1fr 1fr; }
                }
                @media (min-width: 1024px) {
                    .contact-cards { grid-template-columns: repeat(4, 1fr); }
                }
                .contact-card {
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .contact-card:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: translateY(-0.25rem);
                }
                .contact-card .card-icon {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .contact-card h3 {
                    color: #fff;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .contact-card .card-value {
                    color: #4ade80;
                    font-weight: 500;
                    margin-bottom: 0.25rem;
                }
                .contact-card a {
                    text-decoration: none;
                }
                .contact-card a:hover .card-value {
                    text-decoration: underline;
                }
                .contact-card .card-detail {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .contact-columns {
                    display: grid;
                    gap: 4rem;
                }
                @media (min-width: 1024px) {
                    .contact-columns { grid-template-columns: 1fr 1fr; }
                }
                .contact-form-panel {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .contact-form-panel h3, .contact-aside h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .contact-form .field-row {
                    display: grid;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                @media (min-width: 768px) {
                    .contact-form .field-row { grid-template-columns: 1fr 1fr; }
                }
                .contact-form label {
                    display: block;
                    color: #fff;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .contact-form input, .contact-form select, .contact-form textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 0.75rem;
                    color: #fff;
                    transition: border-color 0.3s ease, background 0.3s ease;
                }
                .contact-form input:focus, .contact-form select:focus, .contact-form textarea:focus {
                    outline: none;
                    border-color: #22c55e;
                    background: rgba(255, 255, 255, 0.1);
                }
                .contact-form select option {
                    background: #111827;
                }
                .contact-form textarea {
                    resize: none;
                    margin-bottom: 1.5rem;
                }
                .contact-submit {
                    width: 100%;
                    padding: 1rem;
                    background: linear-gradient(to right, #22c55e, #2563eb, #9333ea);
                    color: #fff;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .contact-submit:hover:enabled {
                    transform: scale(1.02);
                }
                .contact-submit:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .submit-spinner {
                    display: inline-block;
                    width: 1rem;
                    height: 1rem;
                    margin-right: 0.5rem;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: contactSpin 1s linear infinite;
                    vertical-align: middle;
                }
                @keyframes contactSpin {
                    to { transform: rotate(360deg); }
                }
                .status-banner {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    text-align: center;
                }
                .status-banner.success {
                    background: rgba(34, 197, 94, 0.2);
                    border: 1px solid rgba(34, 197, 94, 0.5);
                    color: #4ade80;
                }
                .status-banner.error {
                    background: rgba(239, 68, 68, 0.2);
                    border: 1px solid rgba(239, 68, 68, 0.5);
                    color: #f87171;
                }
                .contact-aside .reason {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .contact-aside .reason-check {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    margin-top: 0.25rem;
                    background: linear-gradient(135deg, #22c55e, #2563eb);
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 0.875rem;
                }
                .contact-aside h4 {
                    color: #fff;
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }
                .contact-aside .reason p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .contact-callout {
                    margin-top: 2rem;
                    padding: 1.5rem;
                    background: linear-gradient(135deg, rgba(34, 197, 94, 0.1), rgba(37, 99, 235, 0.1));
                    border: 1px solid rgba(34, 197, 94, 0.2);
                    border-radius: 1rem;
                }
                .contact-callout p {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .contact-callout a {
                    color: #4ade80;
                    font-weight: 500;
                    text-decoration: none;
                }
                .contact-callout a:hover {
                    color: #86efac;
                }"#}
            </style>

            <div class="contact-inner">
                <div class={classes!(reveal("contact-block"), "contact-header")}>
                    <span class="contact-eyebrow">{"Get In Touch"}</span>
                    <h2>{"Contact "}<span>{"Us"}</span></h2>
                    <p>
                        {"Ready to capture your special moments? Let's discuss your vision \
                          and bring it to life together."}
                    </p>
                </div>

                <div class={classes!(reveal("contact-block"), "contact-cards")} style="transition-delay: 200ms">
                    {
                        contact_cards.iter().map(|(icon, title, value, detail, href)| html! {
                            <div class="contact-card">
                                <div class="card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                {
                                    match href {
                                        Some(href) => html! {
                                            <a href={*href} target="_blank" rel="noopener noreferrer">
                                                <p class="card-value">{*value}</p>
                                            </a>
                                        },
                                        None => html! { <p class="card-value">{*value}</p> },
                                    }
                                }
                                <p class="card-detail">{*detail}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="contact-columns">
                    <div class={reveal("contact-block")} style="transition-delay: 400ms">
                        <div class="contact-form-panel">
                            <h3>{"Send us a message"}</h3>

                            <form class="contact-form" {onsubmit}>
                                <div class="field-row">
                                    <div>
                                        <label for="name">{"Full Name *"}</label>
                                        <input
                                            type="text"
                                            id="name"
                                            value={form.fields.name.clone()}
                                            oninput={edit_input(Field::Name)}
                                            required=true
                                            placeholder="Your full name"
                                        />
                                    </div>
                                    <div>
                                        <label for="email">{"Email Address *"}</label>
                                        <input
                                            type="email"
                                            id="email"
                                            value={form.fields.email.clone()}
                                            oninput={edit_input(Field::Email)}
                                            required=true
                                            placeholder="your@email.com"
                                        />
                                    </div>
                                </div>

                                <div class="field-row">
                                    <div>
                                        <label for="phone">{"Phone Number"}</label>
                                        <input
                                            type="tel"
                                            id="phone"
                                            value={form.fields.phone.clone()}
                                            oninput={edit_input(Field::Phone)}
                                            placeholder="+61 xxx xxx xxx"
                                        />
                                    </div>
                                    <div>
                                        <label for="service">{"Service Interested In *"}</label>
                                        <select
                                            id="service"
                                            value={form.fields.service.clone()}
                                            onchange={edit_service}
                                            required=true
                                        >
                                            <option value="" selected={form.fields.service.is_empty()}>
                                                {"Select a service"}
                                            </option>
                                            {
                                                SERVICES.iter().map(|service| html! {
                                                    <option
                                                        value={*service}
                                                        selected={form.fields.service == *service}
                                                    >
                                                        {*service}
                                                    </option>
                                                }).collect::<Html>()
                                            }
                                        </select>
                                    </div>
                                </div>

                                <div>
                                    <label for="message">{"Message *"}</label>
                                    <textarea
                                        id="message"
                                        rows="5"
                                        value={form.fields.message.clone()}
                                        oninput={edit_message}
                                        required=true
                                        placeholder="Tell us about your project, event date, location, and any specific requirements..."
                                    />
                                </div>

                                <button
                                    type="submit"
                                    class="contact-submit"
                                    disabled={form.is_submitting()}
                                >
                                    {
                                        if form.is_submitting() {
                                            html! {
                                                <>
                                                    <span class="submit-spinner"></span>
                                                    {"Sending Message..."}
                                                </>
                                            }
                                        } else {
                                            html! { {"Send Message"} }
                                        }
                                    }
                                </button>

                                {
                                    match form.status {
                                        SubmitStatus::Success => html! {
                                            <div class="status-banner success">
                                                {"\u{2705} Message sent successfully! We'll get back to you soon."}
                                            </div>
                                        },
                                        SubmitStatus::Error => html! {
                                            <div class="status-banner error">
                                                {"\u{274c} Something went wrong. Please try again or contact us directly."}
                                            </div>
                                        },
                                        SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
                                    }
                                }
                            </form>
                        </div>
                    </div>

                    <div class={classes!(reveal("contact-block"), "contact-aside")} style="transition-delay: 600ms">
                        <h3>{"Why Choose Me?"}</h3>
                        {
                            WHY_CHOOSE_ME.iter().map(|(title, description)| html! {
                                <div class="reason">
                                    <div class="reason-check">{"\u{2713}"}</div>
                                    <div>
                                        <h4>{*title}</h4>
                                        <p>{*description}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }

                        <div class="contact-callout">
                            <h4>{"\u{1f4de} Need Immediate Assistance?"}</h4>
                            <p>
                                {"For urgent inquiries or last-minute bookings, give me a call \
                                  directly. I'm here to help!"}
                            </p>
                            <a href={config::site::PHONE_HREF}>{config::site::PHONE_DISPLAY}</a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
