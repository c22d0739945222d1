use crate::ui::components::SectionHeader;
use blockpress_engine::blocks::TestimonialSlider;
use blockpress_engine::blocks::kinds::star_states;
use blockpress_engine::models::image_url;
use dioxus::prelude::*;

#[component]
pub fn TestimonialBlock(block: TestimonialSlider) -> Element {
    let mut carousel = use_signal(|| block.carousel());
    let current = carousel().index();
    let background = block.background().class();

    let Some(testimonial) = block.testimonials.get(current) else {
        return rsx! {};
    };
    let stars = testimonial.rating().map(star_states);

    rsx! {
        section {
            class: "testimonials {background}",
            SectionHeader { intro: block.intro.clone() }
            div {
                class: "testimonial-slider",
                if carousel().has_controls() {
                    button {
                        class: "carousel-control previous",
                        aria_label: "Previous testimonial",
                        onclick: move |_| carousel.write().previous(),
                        "‹"
                    }
                }
                figure {
                    class: "testimonial",
                    if let Some(stars) = stars {
                        div {
                            class: "stars",
                            for (index, filled) in stars.into_iter().enumerate() {
                                span {
                                    key: "{index}",
                                    class: if_active(filled, "star filled", "star"),
                                    "★"
                                }
                            }
                        }
                    }
                    if let Some(text) = &testimonial.testimonial_text {
                        blockquote { "“{text}”" }
                    }
                    figcaption {
                        if let Some(photo) = image_url(testimonial.client_photo.as_ref()) {
                            img {
                                class: "client-photo",
                                src: "{photo}",
                                alt: testimonial.client_name.clone().unwrap_or_default(),
                            }
                        }
                        if let Some(name) = &testimonial.client_name {
                            strong { "{name}" }
                        }
                        if let Some(position) = &testimonial.client_position {
                            span { class: "client-position", "{position}" }
                        }
                    }
                }
                if carousel().has_controls() {
                    button {
                        class: "carousel-control next",
                        aria_label: "Next testimonial",
                        onclick: move |_| carousel.write().next(),
                        "›"
                    }
                }
            }
            if carousel().has_controls() {
                div {
                    class: "carousel-dots",
                    for index in 0..carousel().len() {
                        button {
                            key: "{index}",
                            class: if_active(index == current, "dot active", "dot"),
                            aria_label: format!("Go to testimonial {}", index + 1),
                            onclick: move |_| carousel.write().go_to(index),
                        }
                    }
                }
            }
        }
    }
}

fn if_active(active: bool, on: &'static str, off: &'static str) -> &'static str {
    if active { on } else { off }
}
