//! Built-in page copy.
//!
//! Each function returns a fresh, owned copy in display order.

use crate::types::{
    FaqEntry, FeatureItem, IconKind, LinkPreviewCard, PartnerLogo, PinCard, ServiceCard,
    SocialLink, StickyScrollItem, TestimonialEntry,
};

/// Researcher testimonials, in carousel order.
pub fn testimonials() -> Vec<TestimonialEntry> {
    [
        (
            "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?q=80&w=2070&auto=format&fit=crop",
            "Dr. Sarah Johnson",
            "Medical Researcher at Stanford University",
            "DataMaster has revolutionized our research workflow. The quality of healthcare datasets and the analytical tools have significantly accelerated our discoveries in cardiovascular disease treatment.",
        ),
        (
            "https://images.unsplash.com/photo-1537368910025-700350fe46c7?q=80&w=2070&auto=format&fit=crop",
            "James Wilson",
            "Data Scientist at Mayo Clinic",
            "DataMaster has made clinical data analysis accessible to our entire team. It's now an essential part of our daily workflow.",
        ),
        (
            "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?q=80&w=2070&auto=format&fit=crop",
            "Dr. Maria Rodriguez",
            "Head of Oncology Research",
            "Access to high-quality medical datasets has been instrumental in our cancer research. DataMaster's HIPAA compliance and data security features give us confidence that we're working with protected information.",
        ),
    ]
    .into_iter()
    .map(|(src, name, designation, quote)| TestimonialEntry {
        src: src.into(),
        name: name.into(),
        designation: designation.into(),
        quote: quote.into(),
    })
    .collect()
}

/// Partner institution logos for the slider.
pub fn partner_logos() -> Vec<PartnerLogo> {
    [
        ("/logos/mayo-clinic.svg", "Mayo Clinic", 150),
        ("/logos/stanford-medicine.svg", "Stanford Medicine", 180),
        ("/logos/cleveland-clinic.svg", "Cleveland Clinic", 160),
        ("/logos/mount-sinai.svg", "Mount Sinai", 140),
        ("/logos/john-hopkins.svg", "Johns Hopkins Medicine", 180),
        ("/logos/nih.svg", "National Institutes of Health", 140),
        ("/logos/mass-general.svg", "Massachusetts General Hospital", 170),
    ]
    .into_iter()
    .map(|(src, alt, width)| PartnerLogo {
        src: src.into(),
        alt: alt.into(),
        width,
        height: 60,
    })
    .collect()
}

/// Service cards; each links to a section of the page.
pub fn service_cards() -> Vec<ServiceCard> {
    [
        (
            "Data Analytics",
            "Our advanced analytics tools help you transform raw data into actionable insights for better healthcare outcomes.",
            "#analytics",
        ),
        (
            "Machine Learning Models",
            "Leverage our pre-trained healthcare ML models to predict patient outcomes and optimize treatment plans.",
            "#features",
        ),
        (
            "HIPAA Compliance",
            "All our data processing and storage solutions meet strict healthcare industry security standards.",
            "#faq",
        ),
        (
            "Research Collaboration",
            "Connect with leading medical researchers and institutions through our secure collaboration platform.",
            "#research",
        ),
        (
            "Data Visualization",
            "Create stunning visual representations of complex medical data for easier interpretation.",
            "#analytics",
        ),
        (
            "Custom Solutions",
            "Our team can build tailored data solutions to meet your specific healthcare organization needs.",
            "#team",
        ),
    ]
    .into_iter()
    .map(|(title, description, link)| ServiceCard {
        title: title.into(),
        description: description.into(),
        link: link.into(),
    })
    .collect()
}

/// Bento grid features. The 4th and 7th tiles span two columns.
pub fn feature_items() -> Vec<FeatureItem> {
    [
        (
            "The Dawn of Innovation",
            "Explore the birth of groundbreaking ideas and inventions.",
            IconKind::Clipboard,
        ),
        (
            "The Digital Revolution",
            "Dive into the transformative power of technology.",
            IconKind::FileBroken,
        ),
        (
            "The Art of Design",
            "Discover the beauty of thoughtful and functional design.",
            IconKind::Signature,
        ),
        (
            "The Power of Communication",
            "Understand the impact of effective communication in our lives.",
            IconKind::TableColumn,
        ),
        (
            "The Pursuit of Knowledge",
            "Join the quest for understanding and enlightenment.",
            IconKind::ArrowWave,
        ),
        (
            "The Joy of Creation",
            "Experience the thrill of bringing ideas to life.",
            IconKind::BoxTopLeft,
        ),
        (
            "The Spirit of Adventure",
            "Embark on exciting journeys and thrilling discoveries.",
            IconKind::BoxRight,
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| FeatureItem {
        title: title.into(),
        description: description.into(),
        icon,
    })
    .collect()
}

/// Sticky-scroll steps.
pub fn sticky_scroll_items() -> Vec<StickyScrollItem> {
    [
        (
            "Comprehensive Data Collection",
            "Access our extensive library of healthcare datasets, carefully curated and maintained for research and analysis.",
            "Data Library",
            IconKind::DataLibrary,
        ),
        (
            "Advanced Visualization Tools",
            "Transform complex medical data into intuitive visualizations that reveal patterns and insights at a glance.",
            "Visual Analytics",
            IconKind::VisualAnalytics,
        ),
        (
            "Research Collaboration",
            "Connect with experts and collaborate on groundbreaking research projects using our secure data-sharing features.",
            "Collaboration Network",
            IconKind::Collaboration,
        ),
    ]
    .into_iter()
    .map(|(title, description, label, icon)| StickyScrollItem {
        title: title.into(),
        description: description.into(),
        label: label.into(),
        icon,
    })
    .collect()
}

/// FAQ questions and answers.
pub fn faq_entries() -> Vec<FaqEntry> {
    [
        (
            "Where does DataMaster data come from?",
            "Datasets are sourced from partner hospitals and research institutions under data-use agreements, then de-identified before they reach the catalog.",
        ),
        (
            "Is the platform HIPAA compliant?",
            "Yes. Storage, processing and access logging follow HIPAA safeguards, and every export is audited.",
        ),
        (
            "Can I bring my own models?",
            "Notebooks and model containers run inside the secure workspace next to the data, so nothing leaves the compliance boundary.",
        ),
        (
            "How do research teams collaborate?",
            "Workspaces can be shared across institutions with role-based access, versioned datasets and shared analysis history.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}

/// The research hub call-out.
pub fn pin_card() -> PinCard {
    PinCard {
        title: "DataMaster Research Hub".into(),
        href: "#research".into(),
        description: "Curated cohorts, analysis notebooks and collaboration in one secure place."
            .into(),
    }
}

/// The "developed by" link and its preview card size.
pub fn link_preview() -> LinkPreviewCard {
    LinkPreviewCard {
        url: "https://github.com/yourusername".into(),
        label: "DataMaster Development Team".into(),
        width: 300,
        height: 150,
    }
}

/// Footer social links.
pub fn social_links() -> Vec<SocialLink> {
    [
        ("Twitter", "https://twitter.com/datamaster"),
        ("LinkedIn", "https://www.linkedin.com/company/datamaster"),
        ("GitHub", "https://github.com/yourusername"),
        ("Email", "mailto:hello@datamaster.health"),
    ]
    .into_iter()
    .map(|(label, href)| SocialLink {
        label: label.into(),
        href: href.into(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonials_keep_display_order() {
        let names: Vec<_> = testimonials().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["Dr. Sarah Johnson", "James Wilson", "Dr. Maria Rodriguez"]
        );
    }

    #[test]
    fn logos_have_intrinsic_size() {
        let logos = partner_logos();
        assert_eq!(logos.len(), 7);
        assert!(logos.iter().all(|l| l.height == 60 && l.width >= 140));
        assert_eq!(logos[0].alt, "Mayo Clinic");
    }

    #[test]
    fn service_cards_link_to_anchors() {
        let cards = service_cards();
        assert_eq!(cards.len(), 6);
        assert!(cards.iter().all(|c| c.link.starts_with('#')));
    }
}
