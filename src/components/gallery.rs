use yew::prelude::*;
use gloo_timers::callback::Timeout;

const WORK_IMAGES: [&str; 10] = [
    "/assets/work1.jpg",
    "/assets/work2.jpg",
    "/assets/work3.jpg",
    "/assets/work4.jpg",
    "/assets/work5.jpg",
    "/assets/work6.jpg",
    "/assets/work7.jpg",
    "/assets/work8.jpg",
    "/assets/work9.jpg",
    "/assets/work10.jpg",
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let is_visible = use_state(|| false);
    let selected_image = use_state(|| None::<&'static str>);

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

    let close_modal = {
        let selected_image = selected_image.clone();
        Callback::from(move |_: MouseEvent| selected_image.set(None))
    };

    html! {
        <section id="portfolio" class="gallery-section">
            <style>
                {r#".gallery-section {
                    position: relative;
                    width: 100%;
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom, #000, #111827, #000);
                    overflow: hidden;
                }
                .gallery-inner {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .gallery-header {
                    text-align: center;
                    margin-bottom: 4rem;
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .gallery-header.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .gallery-eyebrow {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    color: #c084fc;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }
                .gallery-header h2 {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    font-weight: 900;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .gallery-header h2 span {
                    background: linear-gradient(to right, #c084fc, #60a5fa, #22d3ee);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .gallery-header p {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                @media (min-width: 640px) {
                    .gallery-grid { grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                }
                @media (min-width: 1024px) {
                    .gallery-grid { grid-template-columns: repeat(5, 1fr); }
                }
                .gallery-tile {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    overflow: hidden;
                    border-radius: 1rem;
                    background: #111827;
                    border: 1px solid rgba(31, 41, 55, 0.5);
                    cursor: pointer;
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }
                .gallery-tile.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .gallery-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease, filter 0.5s ease;
                }
                .gallery-tile:hover img {
                    transform: scale(1.1);
                    filter: brightness(1.1);
                }
                .gallery-tile-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to top, rgba(0,0,0,0.6), transparent);
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-tile:hover .gallery-tile-overlay {
                    opacity: 1;
                }
                .gallery-modal {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(4px);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .gallery-modal-content {
                    position: relative;
                    max-width: 56rem;
                    max-height: 100%;
                }
                .gallery-modal-content img {
                    max-width: 100%;
                    max-height: 90vh;
                    object-fit: contain;
                    border-radius: 1rem;
                }
                .gallery-modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    background: rgba(0, 0, 0, 0.5);
                    border: none;
                    border-radius: 50%;
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .gallery-modal-close:hover {
                    background: rgba(0, 0, 0, 0.7);
                }"#}
            </style>

            <div class="gallery-inner">
                <div class={classes!("gallery-header", (*is_visible).then(|| "revealed"))}>
                    <span class="gallery-eyebrow">{"Portfolio"}</span>
                    <h2>{"Our "}<span>{"Work"}</span></h2>
                    <p>
                        {"A showcase of our finest moments captured through the lens of \
                          creativity and passion."}
                    </p>
                </div>

                <div class="gallery-grid">
                    {
                        WORK_IMAGES.iter().enumerate().map(|(index, image)| {
                            let onclick = {
                                let selected_image = selected_image.clone();
                                let image = *image;
                                Callback::from(move |_: MouseEvent| selected_image.set(Some(image)))
                            };
                            let tile_class = classes!(
                                "gallery-tile",
                                (*is_visible).then(|| "revealed")
                            );
                            html! {
                                <div
                                    class={tile_class}
                                    style={format!("transition-delay: {}ms", index * 100)}
                                    {onclick}
                                >
                                    <img src={*image} alt={format!("Work {}", index + 1)} />
                                    <div class="gallery-tile-overlay">{"View Details"}</div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            {
                if let Some(image) = *selected_image {
                    html! {
                        <div class="gallery-modal" onclick={close_modal.clone()}>
                            <div class="gallery-modal-content">
                                <img src={image} alt="Full size work" />
                                <button class="gallery-modal-close" onclick={close_modal}>
                                    {"\u{2715}"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
