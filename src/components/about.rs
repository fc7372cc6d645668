use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

const PORTRAIT_IMAGE: &str = "v1753684843/rahul-portrait_juhupj.jpg";
const ABOUT_HERO_IMAGE: &str = "v1753684867/about-hero_fiea5g.jpg";

const STATS: [(&str, &str); 4] = [
    ("100%", "Client Satisfaction"),
    ("24/7", "Passion for Photography"),
    ("Fresh", "Creative Perspective"),
    ("\u{221e}", "Dedication to Excellence"),
];

const VALUES: [(&str, &str, &str); 4] = [
    ("\u{1f3af}", "Precision", "Every shot matters"),
    ("\u{1f4a1}", "Creativity", "Unique perspectives"),
    ("\u{2764}\u{fe0f}", "Passion", "Love what we do"),
    ("\u{1f91d}", "Trust", "Reliable partnership"),
];

// Remote images are decorative; with no Cloudinary account configured the
// section simply renders without them.
fn remote_image(path: &str, alt: &str, class: &'static str) -> Html {
    match config::cloudinary_image_base_url() {
        Some(base) => html! {
            <div class={classes!("about-image", class)}>
                <img src={format!("{}{}", base, path)} alt={alt.to_string()} />
                <div class="about-image-shade"></div>
            </div>
        },
        None => html! {},
    }
}

#[function_component(About)]
pub fn about() -> Html {
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

    let reveal = |base: &'static str| {
        classes!(base, (*is_visible).then(|| "revealed"))
    };

    html! {
        <section class="about-section">
            <style>
                {r#".about-section {
                    position: relative;
                    width: 100%;
                    padding: 5rem 1rem;
                    background: linear-gradient(to bottom, #000, #111827, #000);
                }
                .about-inner {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .about-block {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .about-block.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .about-header {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .about-eyebrow {
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
                    margin-bottom: 1.5rem;
                }
                .about-header h2 {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    font-weight: 900;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .about-header h2 span, .about-person h3 span {
                    background: linear-gradient(to right, #60a5fa, #a855f7, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .about-header p {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    max-width: 56rem;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .about-grid {
                    display: grid;
                    gap: 4rem;
                    margin-bottom: 5rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr 1fr; }
                }
                .about-image {
                    position: relative;
                }
                .about-image img {
                    width: 100%;
                    height: 500px;
                    object-fit: cover;
                    border-radius: 1rem;
                }
                .about-image-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0,0,0,0.3), transparent);
                    border-radius: 1rem;
                }
                .about-story h3, .about-person h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .about-story p, .about-person p {
                    color: #d1d5db;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .about-values {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .about-value {
                    padding: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    transition: background 0.3s ease;
                }
                .about-value:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .about-value .value-icon {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .about-value h4 {
                    color: #fff;
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }
                .about-value p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin: 0;
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                @media (min-width: 768px) {
                    .about-stats { grid-template-columns: repeat(4, 1fr); }
                }
                .about-stat {
                    text-align: center;
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                }
                .about-stat .stat-number {
                    font-size: 2.25rem;
                    font-weight: 900;
                    background: linear-gradient(to right, #60a5fa, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 0.5rem;
                }
                .about-stat .stat-label {
                    color: #9ca3af;
                    font-weight: 500;
                }"#}
            </style>

            <div class="about-inner">
                <div class={classes!(reveal("about-block"), "about-header")}>
                    <span class="about-eyebrow">{"About Us"}</span>
                    <h2>{"Our "}<span>{"Story"}</span></h2>
                    <p>
                        {"I'm Rahul Nag, an emerging photographer with a fresh perspective \
                          and boundless passion for capturing life's most precious moments. \
                          Every shot is an opportunity to create something beautiful, and I \
                          approach each project with creativity, dedication, and an \
                          unwavering commitment to exceeding expectations."}
                    </p>
                </div>

                <div class="about-grid">
                    <div class={reveal("about-block")} style="transition-delay: 200ms">
                        { remote_image(ABOUT_HERO_IMAGE, "Rahul Nag - Photographer", "about-hero-image") }
                    </div>

                    <div class={classes!(reveal("about-block"), "about-story")} style="transition-delay: 400ms">
                        <h3>{"A Fresh Vision in Photography"}</h3>
                        <p>
                            {"My journey into photography began with a simple fascination for \
                              capturing the beauty in everyday moments. What started as a hobby \
                              has quickly grown into a passionate pursuit of visual \
                              storytelling. I believe that every moment tells a story, and my \
                              mission is to capture those stories with fresh eyes, creativity, \
                              and genuine care."}
                        </p>
                        <p>
                            {"As a new photographer, I bring enthusiasm, modern techniques, and \
                              a hunger to create something extraordinary with every shoot. I \
                              don't just take pictures, I craft visual narratives that evoke \
                              emotions, preserve memories, and celebrate the unique beauty in \
                              each moment."}
                        </p>

                        <div class="about-values">
                            {
                                VALUES.iter().map(|(icon, title, desc)| html! {
                                    <div class="about-value">
                                        <div class="value-icon">{*icon}</div>
                                        <h4>{*title}</h4>
                                        <p>{*desc}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                <div class={reveal("about-block")} style="transition-delay: 600ms">
                    <div class="about-stats">
                        {
                            STATS.iter().map(|(number, label)| html! {
                                <div class="about-stat">
                                    <div class="stat-number">{*number}</div>
                                    <div class="stat-label">{*label}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class={reveal("about-block")} style="transition-delay: 800ms">
                    <div class="about-grid about-person">
                        <div>
                            <h3>{"Meet "}<span>{config::site::PHOTOGRAPHER}</span></h3>
                            <p>
                                {"Based in Sydney, I'm an emerging photographer who discovered \
                                  my passion for visual storytelling through a love of capturing \
                                  authentic moments. Though I'm new to the professional scene, \
                                  my enthusiasm and fresh perspective drive me to create \
                                  meaningful visual experiences for every client."}
                            </p>
                            <p>
                                {"When I'm not behind the camera, you'll find me exploring \
                                  Sydney's stunning locations, studying the work of master \
                                  photographers, practicing new techniques, and constantly \
                                  seeking inspiration to bring fresh ideas to every shoot."}
                            </p>
                        </div>
                        { remote_image(PORTRAIT_IMAGE, "Rahul Nag - Photographer", "about-portrait-image") }
                    </div>
                </div>
            </div>
        </section>
    }
}
