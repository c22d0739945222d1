use crate::ui::components::SectionHeader;
use blockpress_engine::blocks::LocationMap;
use dioxus::prelude::*;

fn card_class(selected: bool) -> &'static str {
    if selected {
        "location-card selected"
    } else {
        "location-card"
    }
}

#[component]
pub fn LocationBlock(block: LocationMap) -> Element {
    let mut selection = use_signal(|| block.selection());
    let state = selection();
    let background = block.background().class();
    let map_url = block.map_url(state.active());
    let several = block.locations.len() > 1;

    rsx! {
        section {
            class: "locations {background}",
            SectionHeader { intro: block.intro.clone() }
            div {
                class: "location-layout",
                div {
                    class: "map-frame",
                    if let Some(url) = map_url {
                        iframe {
                            src: "{url}",
                            title: "Location map",
                            "loading": "lazy",
                            "referrerpolicy": "no-referrer-when-downgrade",
                        }
                    } else {
                        div { class: "map-placeholder", "Map unavailable" }
                    }
                    if several && state.active().is_some() {
                        button {
                            class: "link-button show-all",
                            onclick: move |_| selection.write().clear(),
                            "Show all locations"
                        }
                    }
                }
                if block.show_location_cards {
                    div {
                        class: "location-cards",
                        for (index, location) in block.locations.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: card_class(state.is_selected(index)),
                                onclick: move |_| selection.write().select(index),
                                if let Some(name) = &location.location_name {
                                    h3 { "{name}" }
                                }
                                if !location.full_address().is_empty() {
                                    p { class: "location-address", {location.full_address()} }
                                }
                                if let Some(phone) = &location.phone {
                                    a { href: "tel:{phone}", "{phone}" }
                                }
                                if let Some(email) = &location.email {
                                    a { href: "mailto:{email}", "{email}" }
                                }
                                if let Some(hours) = &location.hours {
                                    div { class: "location-hours prose", dangerous_inner_html: hours.as_str() }
                                }
                                if let Some(info) = &location.additional_info {
                                    p { class: "location-info", "{info}" }
                                }
                                if let Some(directions) = location.directions_url() {
                                    a {
                                        class: "directions",
                                        href: "{directions}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                                        "Get Directions"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
