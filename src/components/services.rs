use yew::prelude::*;
use gloo_timers::callback::Timeout;

const SERVICES_DATA: [(&str, &str, &str, u32); 2] = [
    (
        "Photography",
        "/assets/photography.jpg",
        "Capturing life's precious moments with artistic precision, creative vision, \
         and professional expertise that tells your unique story.",
        200,
    ),
    (
        "Videography",
        "/assets/videography.jpg",
        "Bringing stories to life through cinematic storytelling, motion graphics, \
         and visual narratives that captivate and inspire.",
        400,
    ),
];

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: AttrValue,
    pub image: AttrValue,
    pub description: AttrValue,
    pub on_portfolio_click: Callback<()>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let is_hovered = use_state(|| false);

    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };
    let onclick = {
        let on_portfolio_click = props.on_portfolio_click.clone();
        Callback::from(move |_: MouseEvent| on_portfolio_click.emit(()))
    };

    let card_class = classes!("service-card", (*is_hovered).then(|| "hovered"));

    html! {
        <article class={card_class} {onmouseenter} {onmouseleave}>
            <div class="service-card-image">
                <img src={props.image.clone()} alt={format!("{} service showcase", props.title)} />
                <div class="service-card-shade"></div>
            </div>

            // Particle overlay only shows while hovered.
            <div class="service-particles">
                {
                    (0..6).map(|i| {
                        let style = format!(
                            "left: {}%; top: {}%; animation-delay: {}ms;",
                            20 + i * 15,
                            30 + i * 8,
                            i * 200,
                        );
                        html! { <div class="service-particle" style={style}></div> }
                    }).collect::<Html>()
                }
            </div>

            <div class="service-card-body">
                <h3>{props.title.clone()}</h3>
                <p>{props.description.clone()}</p>
                <button class="service-portfolio-button" {onclick}>
                    {"View Portfolio"}
                </button>
            </div>
        </article>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let is_visible = use_state(|| false);

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

    // The portfolio grid lives further down the same page.
    let scroll_to_portfolio = Callback::from(|_| {
        if let Some(section) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("portfolio"))
        {
            section.scroll_into_view();
        }
    });

    html! {
        <section class="services-section">
            <style>
                {r#".services-section {
                    position: relative;
                    width: 100%;
                    padding: 5rem 1rem;
                    background: linear-gradient(to bottom, #000, #111827, #000);
                }
                .services-inner {
                    position: relative;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .services-header {
                    text-align: center;
                    margin-bottom: 4rem;
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .services-header.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .services-eyebrow {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    color: #60a5fa;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }
                .services-header h2 {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    font-weight: 900;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .services-header h2 span {
                    background: linear-gradient(to right, #60a5fa, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .services-header p {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .services-grid {
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: 1fr 1fr; }
                }
                .services-grid-item {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .services-grid-item.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .service-card {
                    position: relative;
                    height: 500px;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    background: linear-gradient(135deg, #111827, #1f2937, #000);
                    border: 1px solid rgba(55, 65, 81, 0.5);
                    cursor: pointer;
                    transition: border-color 0.7s ease, transform 0.7s ease;
                }
                .service-card.hovered {
                    border-color: rgba(59, 130, 246, 0.3);
                    transform: translateY(-0.5rem);
                }
                .service-card-image, .service-card-image img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 1s ease;
                }
                .service-card.hovered .service-card-image img {
                    transform: scale(1.15) rotate(2deg);
                }
                .service-card-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, rgba(0,0,0,0.7), rgba(0,0,0,0.3));
                }
                .service-particles {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .service-particle {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    opacity: 0;
                    transition: opacity 1s ease;
                }
                .service-card.hovered .service-particle {
                    opacity: 1;
                    animation: servicePulse 2s ease-in-out infinite;
                }
                @keyframes servicePulse {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.5); }
                }
                .service-card-body {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2rem;
                }
                .service-card-body h3 {
                    font-size: 1.875rem;
                    font-weight: 900;
                    color: #fff;
                    margin-bottom: 0.75rem;
                }
                .service-card-body p {
                    color: #d1d5db;
                    margin-bottom: 1.5rem;
                    line-height: 1.6;
                }
                .service-portfolio-button {
                    align-self: flex-start;
                    padding: 1rem 2rem;
                    background: linear-gradient(to right, #3b82f6, #9333ea, #db2777);
                    color: #fff;
                    font-weight: 600;
                    border: none;
                    border-radius: 1rem;
                    cursor: pointer;
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .service-card.hovered .service-portfolio-button {
                    opacity: 1;
                    transform: translateY(0);
                }"#}
            </style>

            <div class="services-inner">
                <header class={classes!("services-header", (*is_visible).then(|| "revealed"))}>
                    <span class="services-eyebrow">{"What We Offer"}</span>
                    <h2>{"Our "}<span>{"Services"}</span></h2>
                    <p>
                        {"We blend artistic vision with technical excellence to create \
                          unforgettable visual experiences."}
                    </p>
                </header>

                <div class="services-grid">
                    {
                        SERVICES_DATA.iter().map(|(title, image, description, delay)| {
                            let item_class = classes!(
                                "services-grid-item",
                                (*is_visible).then(|| "revealed")
                            );
                            html! {
                                <div class={item_class} style={format!("transition-delay: {}ms", delay)}>
                                    <ServiceCard
                                        title={*title}
                                        image={*image}
                                        description={*description}
                                        on_portfolio_click={scroll_to_portfolio.clone()}
                                    />
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
