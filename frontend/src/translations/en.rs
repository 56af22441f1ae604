use super::*;

pub static EN: Translations = Translations {
    meta: TranslationMeta {
        code: "en",
        label: "EN",
        name: "English",
    },
    navbar: NavbarTranslations {
        services: "Services",
        case_studies: "Case Studies",
        process: "Process",
        philosophy: "Philosophy",
        engagement: "Engagement",
        cta: "Schedule Discovery",
        toggle_label: "PT",
    },
    hero: HeroTranslations {
        strap: "Strategic Engineering Partner",
        headline: "Engineering Your Unfair Advantage.",
        subheadline: "We architect mission-critical SaaS platforms, enterprise AI solutions, retrieval-augmented generation systems, and autonomous agents that hardwire leverage into your business. When failure is not an option, we are your strike team.",
        primary_cta: "Schedule a Discovery Call",
        secondary_cta: "Proof of Impact",
        scroll_top: "Scroll",
        scroll_bottom: "Start the Brief",
    },
    contact: ContactTranslations {
        dialog_title: "Let's Build What's Next.",
        dialog_description: "Have a complex problem? We're interested. Let's schedule a 30-minute discovery call.",
        close_label: "Close dialog",
        full_name: "Full Name*",
        work_email: "Work Email*",
        company: "Company*",
        challenge: "What is your primary challenge?*",
        challenge_placeholder: "Choose one",
        project: "Tell us about your project (optional)",
        submit: "Submit",
        sending: "Sending...",
        success: "Thanks! We'll get in touch within one business day.",
        fallback_error: "We couldn't send your message. Try again.",
    },
    toast: ToastTranslations {
        notice: "NOTICE",
        success: "SUCCESS",
        error: "ERROR",
        dismiss: "Dismiss",
        sent_title: "Brief received",
        failed_title: "Submission failed",
    },
};
