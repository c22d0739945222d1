use crate::ui::components::SectionHeader;
use blockpress_engine::blocks::TeamProfiles;
use blockpress_engine::blocks::kinds::{BIO_PREVIEW_CHARS, TeamMember};
use dioxus::prelude::*;

/// Bio shown on the card: the first characters of long bios, ending in an ellipsis.
fn bio_preview(member: &TeamMember) -> Option<String> {
    let bio = member.bio.as_deref()?;
    if member.has_long_bio() {
        let preview: String = bio.chars().take(BIO_PREVIEW_CHARS).collect();
        Some(format!("{}...", preview.trim_end()))
    } else {
        Some(bio.to_string())
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn TeamBlock(block: TeamProfiles) -> Element {
    let mut modal = use_signal(|| block.modal());
    let background = block.background().class();
    let grid = block.columns().class();
    let open_member = modal().active().and_then(|index| block.team_members.get(index));

    rsx! {
        section {
            class: "team {background}",
            SectionHeader { intro: block.intro.clone() }
            div {
                class: "{grid}",
                for (index, member) in block.team_members.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "team-card",
                        if let Some(photo) = member.photo_url() {
                            img { class: "team-photo", src: "{photo}", alt: member.photo_alt() }
                        } else {
                            div { class: "team-photo placeholder", {initials(member.name())} }
                        }
                        h3 { {member.name()} }
                        if let Some(position) = &member.position {
                            p { class: "team-position", "{position}" }
                        }
                        if let Some(preview) = bio_preview(member) {
                            p { class: "team-bio", "{preview}" }
                        }
                        if member.has_long_bio() {
                            button {
                                class: "link-button",
                                onclick: move |_| modal.write().select(index),
                                "View Full Bio"
                            }
                        }
                        ContactLinks { member: member.clone() }
                        if !block.social_links(member).is_empty() {
                            div {
                                class: "social-links",
                                for link in block.social_links(member) {
                                    a {
                                        key: "{link.network}",
                                        href: "{link.url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        aria_label: "{link.network}",
                                        "{link.network}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(member) = open_member {
                div {
                    class: "modal-backdrop",
                    onclick: move |_| modal.write().clear(),
                    div {
                        class: "modal",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        button {
                            class: "modal-close",
                            aria_label: "Close",
                            onclick: move |_| modal.write().clear(),
                            "×"
                        }
                        h3 { {member.name()} }
                        if let Some(position) = &member.position {
                            p { class: "team-position", "{position}" }
                        }
                        if let Some(bio) = &member.bio {
                            p { class: "team-bio full", "{bio}" }
                        }
                        ContactLinks { member: member.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactLinks(member: TeamMember) -> Element {
    if member.email.is_none() && member.phone.is_none() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "team-contact",
            if let Some(email) = &member.email {
                a { href: "mailto:{email}", "{email}" }
            }
            if let Some(phone) = &member.phone {
                a { href: "tel:{phone}", "{phone}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn member(name: &str, bio: &str) -> TeamMember {
        TeamMember {
            name: Some(name.to_string()),
            bio: Some(bio.to_string()),
            ..Default::default()
        }
    }

    fn render_team(block: TeamProfiles) -> String {
        let mut dom = VirtualDom::new_with_props(TeamBlock, TeamBlockProps { block });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_long_bio_is_truncated_with_modal_button() {
        let long_bio = "word ".repeat(40);
        let html = render_team(TeamProfiles {
            team_members: vec![member("Ada Lovelace", &long_bio)],
            show_social_links: true,
            ..Default::default()
        });

        assert!(html.contains("View Full Bio"));
        assert!(html.contains("..."));
        assert!(!html.contains("modal-backdrop"));
    }

    #[test]
    fn test_short_bio_has_no_modal_button() {
        let html = render_team(TeamProfiles {
            team_members: vec![member("Grace Hopper", "Wrote the first compiler.")],
            ..Default::default()
        });

        assert!(html.contains("Wrote the first compiler."));
        assert!(!html.contains("View Full Bio"));
    }

    #[test]
    fn test_missing_photo_shows_initials() {
        let html = render_team(TeamProfiles {
            team_members: vec![member("Grace Hopper", "Admiral")],
            ..Default::default()
        });

        assert!(html.contains("placeholder"));
        assert!(html.contains(">GH<"));
    }

    #[test]
    fn test_social_links_respect_toggle() {
        let with_links = TeamMember {
            linkedin_url: Some("https://linkedin.com/in/ada".to_string()),
            ..member("Ada Lovelace", "Analyst")
        };
        let shown = render_team(TeamProfiles {
            team_members: vec![with_links.clone()],
            show_social_links: true,
            ..Default::default()
        });
        let hidden = render_team(TeamProfiles {
            team_members: vec![with_links],
            show_social_links: false,
            ..Default::default()
        });

        assert!(shown.contains("https://linkedin.com/in/ada"));
        assert!(!hidden.contains("social-links"));
    }

    #[test]
    fn test_bio_preview_keeps_short_bios() {
        let short = member("Ada", "Analyst");
        let long = member("Ada", &"x".repeat(151));

        assert_eq!(bio_preview(&short).as_deref(), Some("Analyst"));
        assert_eq!(bio_preview(&long).map(|p| p.chars().count()), Some(153));
    }
}
