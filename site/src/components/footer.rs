//! Page footer

use leptos::prelude::*;

use super::{social_icon_path, Icon};
use crate::types::SocialLink;

/// Brand, social links and the site note.
#[component]
pub fn Footer(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <span class="footer-brand">"DataMaster"</span>
                <nav class="footer-links">
                    {links.into_iter().map(|link| {
                        let path = social_icon_path(&link.label);
                        view! {
                            <a href=link.href aria-label=link.label.clone() title=link.label>
                                <Icon path=path size="20" />
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
                <span class="footer-note">"Marketing preview. No patient data is processed on this site."</span>
            </div>
        </footer>
    }
}
