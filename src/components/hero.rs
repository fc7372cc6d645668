use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use gloo_console::log;
use gloo_timers::callback::Timeout;

use crate::config;
use crate::video_loop::HERO_LOOP;

const DESKTOP_CLIP: &str = "v1753683067/bg-video_xitarl.mp4";
const MOBILE_CLIP: &str = "v1753690681/1_yku9df.mp4";
const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// HAVE_CURRENT_DATA; enough to seek and start playing.
const READY_STATE_CURRENT_DATA: u16 = 2;

fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map_or(false, |width| width < MOBILE_BREAKPOINT_PX)
}

fn play_logging_rejection(video: &HtmlVideoElement) {
    // Autoplay rejection is fine, the video is decorative background.
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log!("Auto-play was prevented:", err);
            }
        }),
        Err(err) => log!("Failed to start playback:", err),
    }
}

/// Wires the loop-window controller onto a media element and returns the
/// teardown that unregisters every listener. Attached per source URL, so a
/// responsive source swap tears down the old resource's observers before the
/// new resource gets its own.
fn attach_loop_controller(video: HtmlVideoElement) -> impl FnOnce() {
    let on_loadeddata = {
        let video = video.clone();
        Closure::wrap(Box::new(move || {
            video.set_current_time(HERO_LOOP.start);
        }) as Box<dyn FnMut()>)
    };

    let on_timeupdate = {
        let video = video.clone();
        Closure::wrap(Box::new(move || {
            // Seek in place, without pausing.
            if let Some(start) = HERO_LOOP.restart_from(video.current_time()) {
                video.set_current_time(start);
            }
        }) as Box<dyn FnMut()>)
    };

    // Fallback for when a timeupdate tick lands after the clip ran out.
    let on_ended = {
        let video = video.clone();
        Closure::wrap(Box::new(move || {
            video.set_current_time(HERO_LOOP.start);
            play_logging_rejection(&video);
        }) as Box<dyn FnMut()>)
    };

    if video.ready_state() >= READY_STATE_CURRENT_DATA {
        video.set_current_time(HERO_LOOP.start);
    } else {
        video
            .add_event_listener_with_callback("loadeddata", on_loadeddata.as_ref().unchecked_ref())
            .unwrap();
    }
    video
        .add_event_listener_with_callback("timeupdate", on_timeupdate.as_ref().unchecked_ref())
        .unwrap();
    video
        .add_event_listener_with_callback("ended", on_ended.as_ref().unchecked_ref())
        .unwrap();

    video.set_muted(true);
    let _ = video.set_attribute("playsinline", "");
    play_logging_rejection(&video);

    move || {
        let _ = video.remove_event_listener_with_callback(
            "loadeddata",
            on_loadeddata.as_ref().unchecked_ref(),
        );
        let _ = video.remove_event_listener_with_callback(
            "timeupdate",
            on_timeupdate.as_ref().unchecked_ref(),
        );
        let _ =
            video.remove_event_listener_with_callback("ended", on_ended.as_ref().unchecked_ref());
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let video_ref = use_node_ref();
    let is_loaded = use_state(|| false);
    let is_mobile = use_state(viewport_is_mobile);

    // Track the responsive breakpoint so the video source swaps with it.
    {
        let is_mobile = is_mobile.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let resize_callback = Closure::wrap(Box::new(move || {
                    is_mobile.set(viewport_is_mobile());
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Entry transition shortly after first paint.
    {
        let is_loaded = is_loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(100, move || is_loaded.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let video_src = config::cloudinary_video_base_url().map(|base| {
        let clip = if *is_mobile { MOBILE_CLIP } else { DESKTOP_CLIP };
        format!("{}{}", base, clip)
    });

    // Keyed on the source URL: stale observers on a replaced resource must
    // not fire, so the old controller is torn down before re-attaching.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let teardown: Option<Box<dyn FnOnce()>> = video_ref
                    .cast::<HtmlVideoElement>()
                    .map(|video| Box::new(attach_loop_controller(video)) as Box<dyn FnOnce()>);

                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            video_src.clone(),
        );
    }

    let reveal_class = |base: &'static str| {
        if *is_loaded {
            classes!(base, "revealed")
        } else {
            classes!(base)
        }
    };

    html! {
        <div class="hero-section">
            <style>
                {r#".hero-section {
                    position: relative;
                    width: 100%;
                    min-height: 100vh;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                }
                .hero-video, .hero-fallback {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    z-index: 0;
                }
                .hero-fallback {
                    background: linear-gradient(135deg, #000 0%, #1a1a2e 50%, #000 100%);
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.2), transparent, rgba(0,0,0,0.2));
                    z-index: 1;
                }
                .hero-content {
                    position: relative;
                    z-index: 3;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1.5rem;
                    text-align: center;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .hero-title, .hero-subtitle {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 1s ease-out, transform 1s ease-out;
                }
                .hero-title.revealed, .hero-subtitle.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero-title {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 900;
                    line-height: 1.1;
                    margin-bottom: 1rem;
                }
                .hero-title .word-light {
                    background: linear-gradient(to right, #fff, #e5e5e5, #9ca3af);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-title .word-accent {
                    background: linear-gradient(to right, #60a5fa, #a855f7, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: clamp(1.25rem, 3vw, 1.875rem);
                    color: #d1d5db;
                    font-weight: 300;
                    max-width: 56rem;
                    line-height: 1.6;
                    transition-delay: 0.3s;
                }
                .hero-subtitle strong {
                    color: #fff;
                    font-weight: 500;
                }
                .hero-particle {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    z-index: 2;
                    animation: heroFloat 5s linear infinite;
                }
                @keyframes heroFloat {
                    0%, 100% { transform: translateY(0) rotate(0deg); opacity: 0.2; }
                    50% { transform: translateY(-20px) rotate(180deg); opacity: 0.8; }
                }"#}
            </style>

            {
                if let Some(src) = video_src {
                    html! {
                        <video
                            ref={video_ref}
                            src={src}
                            class="hero-video"
                            muted=true
                            preload="auto"
                        />
                    }
                } else {
                    html! { <div class="hero-fallback"></div> }
                }
            }
            <div class="hero-overlay"></div>

            {
                (0..20).map(|i| {
                    let style = format!(
                        "left: {}%; top: {}%; animation-delay: {}ms; animation-duration: {}ms;",
                        (i * 17 + 3) % 100,
                        (i * 29 + 7) % 100,
                        i * 150,
                        3000 + (i % 5) * 800,
                    );
                    html! { <div class="hero-particle" style={style}></div> }
                }).collect::<Html>()
            }

            <div class="hero-content">
                <h1 class={reveal_class("hero-title")}>
                    <span class="word-light">{"Cine"}</span>
                    <span class="word-accent">{"Visual"}</span>
                    <br />
                    <span class="word-light">{"Studios"}</span>
                </h1>
                <p class={reveal_class("hero-subtitle")}>
                    {"Where "}<strong>{"cinematic storytelling"}</strong>
                    {" meets "}<strong>{"visual artistry"}</strong>
                </p>
            </div>
        </div>
    }
}
