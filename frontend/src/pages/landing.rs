use yew::prelude::*;

use crate::components::accordion::{AccordionItem, AccordionSingle};
use crate::components::contact_form::ContactForm;
use crate::components::language::{use_language, LanguageSwitcher};
use crate::components::schedule_dialog::ScheduleDialog;
use crate::components::tabs::{Orientation, Tabs, TabsContent, TabsList, TabsTrigger};
use crate::components::text_reveal::TextReveal;

struct Service {
    key: &'static str,
    title: &'static str,
    summary: &'static str,
    points: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        key: "ai",
        title: "Intelligent Systems & AI",
        summary: "We design, fine-tune, and productionize custom LLMs, autonomous agents, and retrieval-augmented generation systems that embed decisions into your operations, not prototypes that gather dust.",
        points: &["Custom LLM fine-tuning", "Autonomous agent fleets", "Retrieval-augmented generation"],
    },
    Service {
        key: "platform",
        title: "Scalable SaaS Platforms",
        summary: "Cloud-native, multi-tenant architecture engineered for regulated, high-throughput environments. From FinTech ledgers to ML workflows, we ship platforms ready for continuous scale.",
        points: &["Multi-tenant architecture", "Compliance-ready foundations", "Continuous deployment"],
    },
    Service {
        key: "data",
        title: "Data & System Architecture",
        summary: "We modernize legacy systems, implement resilient data pipelines, and run full MLOps to create a single source of truth that keeps enterprise AI initiatives deployable and defensible.",
        points: &["Legacy modernization", "Resilient data pipelines", "MLOps and observability"],
    },
];

struct CaseStudy {
    title: &'static str,
    client: &'static str,
    outcome: &'static str,
}

const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Autonomous Agent Fleet for Logistics",
        client: "CLIENT: GLOBAL SCM PROVIDER",
        outcome: "Reduced manual intervention by 78%, delivering 24/7 predictive routing and $12M in year-one savings.",
    },
    CaseStudy {
        title: "RAG System for LegalTech Analysis",
        client: "CLIENT: AMLAW 100 FIRM",
        outcome: "LLM fine-tuning plus secure retrieval compressed research cycles from two weeks to 48 hours with audit trails.",
    },
    CaseStudy {
        title: "Multi-Tenant FinTech SaaS Platform",
        client: "CLIENT: SERIES B STARTUP",
        outcome: "Launched in 16 weeks with SOC 2 controls, audited ledgers, and 99.99% uptime across regions.",
    },
    CaseStudy {
        title: "Legacy System Modernization",
        client: "CLIENT: FORTUNE 500 MANUFACTURER",
        outcome: "Retired 18 monolithic apps, unified the data fabric, and cut maintenance spend by 42% across plants.",
    },
];

const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    ("01", "Deep Discovery & Architecture", "Principal engineers embed with your team, interrogate goals, audit systems, and blueprint a measurable path to ROI before code is written."),
    ("02", "Sprint Zero & Prototyping", "We lock the stack, CI/CD pipeline, and data models. A high-fidelity prototype and architecture review board sign-off align every stakeholder."),
    ("03", "Agile Co-Creation", "Two-week sprints with dedicated leads, open GitHub repos, and unfiltered access. Weekly demos keep decisions fast and transparent."),
    ("04", "Rigorous QA & Security", "Compliance-first delivery covering SOC 2, HIPAA, GDPR, penetration testing, and automated QA, embedded from sprint zero rather than bolted on."),
    ("05", "Deployment & Scalable Hand-off", "We orchestrate production launch, document every system, train your team, and continue with MLOps/SRE support or hand off cleanly. You own the IP."),
];

struct Engagement {
    name: &'static str,
    price: &'static str,
    summary: &'static str,
    includes: &'static [&'static str],
    ideal_for: &'static str,
    featured: bool,
}

const ENGAGEMENTS: &[Engagement] = &[
    Engagement {
        name: "Team Augmentation",
        price: "Monthly Retainer",
        summary: "Principal engineers embedded in your existing team to unblock the roadmap and raise the technical bar.",
        includes: &["Principal-level specialists only", "Direct access to engineers", "Roadmap acceleration metrics"],
        ideal_for: "Ideal for: accelerating critical initiatives",
        featured: false,
    },
    Engagement {
        name: "Scoped Product Build",
        price: "Fixed Project Quote",
        summary: "Cross-functional pod delivering custom SaaS development or enterprise AI solutions with defined scope, timeline, and budget. Includes architecture runway, security hardening, and documentation.",
        includes: &["Product, architect, engineers, QA", "Fixed budget & timeline", "Full IP & code ownership"],
        ideal_for: "Ideal for: new platforms, AI pilots",
        featured: true,
    },
    Engagement {
        name: "Strategic Partner",
        price: "Custom Retainer",
        summary: "Long-term partnership covering legacy system modernization, ongoing MLOps, and product innovation. Dedicated, scalable team owning roadmap, governance, and continuous deployment.",
        includes: &["Dedicated principal leadership", "Proactive architecture & roadmap", "Ongoing MLOps & SRE support"],
        ideal_for: "Ideal for: enterprise transformation",
        featured: false,
    },
];

#[function_component(Navbar)]
fn navbar() -> Html {
    let t = use_language().t();
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let links = [
        ("#services", t.navbar.services),
        ("#case-studies", t.navbar.case_studies),
        ("#process", t.navbar.process),
        ("#philosophy", t.navbar.philosophy),
        ("#engagement", t.navbar.engagement),
    ];

    html! {
        <nav class="top-nav">
            <a href="/" class="nav-logo">{ "TYPEBLE" }</a>
            <div class={classes!("nav-links", (*menu_open).then_some("open"))}>
                { for links.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={close_menu.clone()}>{ *label }</a>
                }) }
            </div>
            <div class="nav-actions">
                <LanguageSwitcher />
                <ScheduleDialog trigger_class="nav-cta" />
                <button type="button" class="nav-burger" aria-label="Menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let t = use_language().t();
    html! {
        <section class="hero">
            <div class="section-eyebrow">{ t.hero.strap }</div>
            <h1 class="hero-headline">
                <TextReveal words={t.hero.headline} speed={0.15} />
            </h1>
            <p class="hero-subheadline">{ t.hero.subheadline }</p>
            <div class="hero-actions">
                <ScheduleDialog trigger_label={AttrValue::from(t.hero.primary_cta)} trigger_class="button-primary" />
                <a href="#case-studies" class="button-secondary">{ t.hero.secondary_cta }</a>
            </div>
            <div class="hero-scroll" aria-hidden="true">
                <span>{ t.hero.scroll_top }</span>
                <span class="hero-scroll-line" />
                <span>{ t.hero.scroll_bottom }</span>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="page-section">
            <div class="section-eyebrow">{ "Capabilities" }</div>
            <h2>{ "Engineering Built for Consequence" }</h2>
            <Tabs default_value={SERVICES[0].key} orientation={Orientation::Vertical} class="services-tabs">
                <TabsList>
                    { for SERVICES.iter().map(|service| html! {
                        <TabsTrigger value={service.key}>{ service.title }</TabsTrigger>
                    }) }
                </TabsList>
                { for SERVICES.iter().map(|service| html! {
                    <TabsContent value={service.key}>
                        <h3>{ service.title }</h3>
                        <p>{ service.summary }</p>
                        <ul class="service-points">
                            { for service.points.iter().map(|point| html! { <li>{ *point }</li> }) }
                        </ul>
                    </TabsContent>
                }) }
            </Tabs>
        </section>
    }
}

#[function_component(CaseStudies)]
fn case_studies() -> Html {
    html! {
        <section id="case-studies" class="page-section">
            <div class="section-eyebrow">{ "Proof of Impact" }</div>
            <h2>{ "Selected Work" }</h2>
            <div class="case-grid">
                { for CASE_STUDIES.iter().map(|study| html! {
                    <article class="case-card">
                        <div class="case-client">{ study.client }</div>
                        <h3>{ study.title }</h3>
                        <p>{ study.outcome }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section id="process" class="page-section">
            <div class="section-eyebrow">{ "How We Work" }</div>
            <h2>{ "From Discovery to Hand-off" }</h2>
            <AccordionSingle default_value={Some(AttrValue::from(PROCESS_STEPS[0].0))}>
                { for PROCESS_STEPS.iter().map(|(step, title, body)| html! {
                    <AccordionItem value={*step} title={*title} eyebrow={AttrValue::from(*step)}>
                        <p>{ *body }</p>
                    </AccordionItem>
                }) }
            </AccordionSingle>
        </section>
    }
}

#[function_component(Philosophy)]
fn philosophy() -> Html {
    html! {
        <section id="philosophy" class="page-section">
            <div class="section-eyebrow">{ "Client Proof" }</div>
            <h2>{ "What Our Clients Say" }</h2>
            <figure class="testimonial">
                <blockquote>
                    { "“This isn’t an ‘agency’; it’s our strategic engineering partner. They diagnosed the architectural failure costing us millions, rebuilt the core platform, and unlocked the next $100M in ARR. Their principals feel like an internal strike team.”" }
                </blockquote>
                <figcaption>
                    <strong>{ "Jane K. Doe" }</strong>
                    <span>{ "Chief Technology Officer" }</span>
                </figcaption>
            </figure>
        </section>
    }
}

#[function_component(Engagements)]
fn engagements() -> Html {
    html! {
        <section id="engagement" class="page-section">
            <div class="section-eyebrow">{ "Engagement Models" }</div>
            <h2>{ "Choose How We Partner" }</h2>
            <div class="engagement-grid">
                { for ENGAGEMENTS.iter().map(|engagement| html! {
                    <article class={classes!("engagement-card", engagement.featured.then_some("featured"))}>
                        <h3>{ engagement.name }</h3>
                        <div class="engagement-price">{ engagement.price }</div>
                        <p>{ engagement.summary }</p>
                        <ul>
                            { for engagement.includes.iter().map(|item| html! { <li>{ *item }</li> }) }
                        </ul>
                        <div class="engagement-ideal">{ engagement.ideal_for }</div>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let t = use_language().t();
    html! {
        <section id="contact" class="page-section contact-section">
            <div class="contact-intro">
                <h2>{ t.contact.dialog_title }</h2>
                <p>{ t.contact.dialog_description }</p>
                <a href="mailto:info@typeble.com?subject=Discovery%20Call%20with%20Typeble" class="button-secondary">
                    { "info@typeble.com" }
                </a>
            </div>
            <ContactForm />
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let language = use_language();
    let t = language.t();
    html! {
        <footer class="site-footer">
            <div class="footer-links">
                <a href="#services">{ t.navbar.services }</a>
                <a href="#case-studies">{ t.navbar.case_studies }</a>
                <a href="#process">{ t.navbar.process }</a>
                <a href="#philosophy">{ t.navbar.philosophy }</a>
                <a href="#engagement">{ t.navbar.engagement }</a>
            </div>
            <div class="footer-social">
                <a href="https://www.linkedin.com/company/typeble" aria-label="LinkedIn">{ "LinkedIn" }</a>
                <a href="https://github.com/typeble" aria-label="GitHub">{ "GitHub" }</a>
            </div>
            <div class="footer-languages">
                { for language.available().iter().map(|option| {
                    let onclick = {
                        let language = language.clone();
                        let option = *option;
                        Callback::from(move |_: MouseEvent| language.set_language(option))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("footer-language", (*option == language.language).then_some("active"))}
                            {onclick}
                        >
                            { option.translations().meta.name }
                        </button>
                    }
                }) }
            </div>
            <p class="footer-legal">{ "© Typeble" }</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing">
            <Navbar />
            <main>
                <Hero />
                <Services />
                <CaseStudies />
                <Process />
                <Philosophy />
                <Engagements />
                <Contact />
            </main>
            <Footer />
            <style>
                {r#"
                    .landing {
                        position: relative;
                        z-index: 1;
                        color: #fff;
                        background: transparent;
                        font-family: 'Inter', sans-serif;
                    }
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(8px);
                    }
                    .nav-logo { color: #fff; font-weight: 700; font-size: 1.5rem; text-decoration: none; }
                    .nav-links { display: flex; gap: 1.5rem; }
                    .nav-links a { color: rgba(255, 255, 255, 0.7); text-decoration: none; font-size: 0.9rem; }
                    .nav-links a:hover { color: #fff; }
                    .nav-actions { display: flex; align-items: center; gap: 1rem; }
                    .nav-burger { display: none; background: none; border: none; color: #fff; font-size: 1.4rem; }
                    .language-switcher {
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                        padding: 0.3rem 0.6rem;
                        font-size: 0.8rem;
                        letter-spacing: 0.1em;
                    }
                    .nav-cta, .button-primary, .contact-submit {
                        background: #fff;
                        color: #000;
                        border: none;
                        padding: 0.75rem 1.5rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .button-secondary {
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        padding: 0.75rem 1.5rem;
                        text-decoration: none;
                    }
                    .hero { min-height: 90vh; display: flex; flex-direction: column; justify-content: center; padding: 0 2rem; max-width: 1100px; margin: 0 auto; }
                    .hero-headline { font-size: clamp(2.5rem, 7vw, 5.5rem); letter-spacing: -0.04em; margin: 1rem 0; }
                    .hero-subheadline { max-width: 680px; color: rgba(255, 255, 255, 0.7); line-height: 1.6; }
                    .hero-actions { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }
                    .hero-scroll { display: flex; align-items: center; gap: 0.75rem; margin-top: 4rem; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; color: rgba(255, 255, 255, 0.5); }
                    .hero-scroll-line { width: 48px; height: 1px; background: rgba(255, 255, 255, 0.4); }
                    .page-section { max-width: 1100px; margin: 0 auto; padding: 6rem 2rem; }
                    .page-section h2 { font-size: clamp(2rem, 4vw, 3rem); letter-spacing: -0.03em; margin-bottom: 2.5rem; }
                    .section-eyebrow { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; color: rgba(255, 255, 255, 0.7); }
                    .tabs-vertical { display: grid; grid-template-columns: 280px 1fr; gap: 2rem; }
                    .tabs-list { display: flex; gap: 0.5rem; }
                    .tabs-vertical .tabs-list { flex-direction: column; }
                    .tabs-trigger { background: none; border: 1px solid rgba(255, 255, 255, 0.15); color: rgba(255, 255, 255, 0.6); padding: 1rem; text-align: left; cursor: pointer; }
                    .tabs-trigger.active { color: #fff; border-color: #fff; }
                    .tabs-content { border: 1px solid rgba(255, 255, 255, 0.15); padding: 2rem; }
                    .case-grid, .engagement-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
                    .case-card, .engagement-card { border: 1px solid rgba(255, 255, 255, 0.15); padding: 2rem; background: rgba(255, 255, 255, 0.03); }
                    .case-client, .engagement-price, .engagement-ideal { font-size: 0.75rem; letter-spacing: 0.15em; color: rgba(255, 255, 255, 0.6); text-transform: uppercase; }
                    .engagement-card.featured { border-color: #fff; }
                    .accordion-item { border-bottom: 1px solid rgba(255, 255, 255, 0.15); }
                    .accordion-trigger { width: 100%; display: flex; justify-content: space-between; align-items: center; background: none; border: none; color: #fff; padding: 1.5rem 0; font-size: 1.2rem; cursor: pointer; text-align: left; }
                    .accordion-eyebrow { color: rgba(255, 255, 255, 0.4); margin-right: 1rem; font-size: 0.9rem; }
                    .accordion-panel p { color: rgba(255, 255, 255, 0.7); line-height: 1.6; padding-bottom: 1.5rem; }
                    .testimonial { border: 2px solid rgba(255, 255, 255, 0.2); padding: 3rem; background: rgba(255, 255, 255, 0.05); margin: 0; }
                    .testimonial blockquote { font-size: 1.6rem; font-weight: 300; line-height: 1.5; margin: 0 0 2rem; }
                    .testimonial figcaption { display: flex; flex-direction: column; gap: 0.25rem; color: rgba(255, 255, 255, 0.7); }
                    .contact-section { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
                    .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
                    .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .contact-field { display: flex; flex-direction: column; gap: 0.4rem; font-size: 0.85rem; color: rgba(255, 255, 255, 0.7); }
                    .contact-field input, .contact-field textarea, .select-trigger {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                        padding: 0.75rem;
                        font: inherit;
                    }
                    .contact-feedback.success { color: #7ee787; }
                    .contact-feedback.error { color: #ff7b72; }
                    .select { position: relative; }
                    .select-trigger { width: 100%; display: flex; justify-content: space-between; cursor: pointer; text-align: left; }
                    .select-placeholder { color: rgba(255, 255, 255, 0.4); }
                    .select-list { position: absolute; top: 100%; left: 0; right: 0; z-index: 20; max-height: 240px; overflow-y: auto; margin: 0.25rem 0 0; padding: 0; list-style: none; background: #111; border: 1px solid rgba(255, 255, 255, 0.2); }
                    .select-option { padding: 0.75rem; cursor: pointer; display: flex; flex-direction: column; }
                    .select-option.highlighted { background: rgba(255, 255, 255, 0.1); }
                    .select-option.selected { font-weight: 600; }
                    .dialog-overlay { position: fixed; inset: 0; z-index: 100; background: rgba(0, 0, 0, 0.8); display: flex; align-items: center; justify-content: center; padding: 1rem; }
                    .dialog-content { position: relative; width: 100%; max-width: 560px; max-height: 90vh; overflow-y: auto; background: #0a0a0a; border: 1px solid rgba(255, 255, 255, 0.2); color: #fff; padding: 2rem; }
                    .dialog-close { position: absolute; top: 1rem; right: 1rem; background: none; border: none; color: #fff; font-size: 1.5rem; cursor: pointer; }
                    .dialog-description { color: rgba(255, 255, 255, 0.7); }
                    .toast-viewport { position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 200; display: flex; flex-direction: column; gap: 0.75rem; max-width: 360px; }
                    .toast { display: flex; gap: 1rem; align-items: flex-start; background: #111; border: 1px solid rgba(255, 255, 255, 0.2); padding: 1rem; color: #fff; }
                    .toast-success { border-color: #7ee787; }
                    .toast-error { border-color: #ff7b72; }
                    .toast-variant { font-size: 0.7rem; letter-spacing: 0.2em; color: rgba(255, 255, 255, 0.6); }
                    .toast-message { margin: 0.25rem 0; font-weight: 600; }
                    .toast-description { margin: 0; color: rgba(255, 255, 255, 0.7); font-size: 0.85rem; }
                    .toast-dismiss { background: none; border: none; color: rgba(255, 255, 255, 0.6); cursor: pointer; }
                    .site-footer { border-top: 1px solid rgba(255, 255, 255, 0.1); padding: 3rem 2rem; display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1.5rem; }
                    .site-footer a { color: rgba(255, 255, 255, 0.6); text-decoration: none; margin-right: 1.25rem; font-size: 0.85rem; }
                    .footer-language { background: none; border: none; color: rgba(255, 255, 255, 0.5); cursor: pointer; font-size: 0.8rem; }
                    .footer-language.active { color: #fff; }
                    .footer-legal { color: rgba(255, 255, 255, 0.4); font-size: 0.8rem; }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .nav-links.open { display: flex; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0; background: #000; padding: 1.5rem 2rem; }
                        .nav-burger { display: block; }
                        .tabs-vertical, .contact-section, .contact-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="page-section">
            <h1>{ "404" }</h1>
            <a href="/" class="button-secondary">{ "Back to home" }</a>
        </section>
    }
}
