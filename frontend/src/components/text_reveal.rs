use yew::prelude::*;

use crate::state::reveal::schedule;

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub words: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub filter: bool,
    /// Seconds each word takes to fade in.
    #[prop_or(0.5)]
    pub duration: f64,
    /// Seconds between consecutive words.
    #[prop_or(0.2)]
    pub speed: f64,
    #[prop_or(0.0)]
    pub initial_delay: f64,
}

#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let plan = use_memo(
        |(words, speed, delay)| schedule(words, *speed, *delay),
        (props.words.clone(), props.speed, props.initial_delay),
    );
    let blur = if props.filter { "blur(10px)" } else { "none" };

    html! {
        <span class={classes!("text-reveal", props.class.clone())}>
            { for plan.iter().map(|word| {
                let style = format!(
                    "animation: text-reveal {}s ease forwards; animation-delay: {}s; filter: {};",
                    props.duration, word.delay, blur
                );
                html! {
                    <span class="text-reveal-word" {style}>{ format!("{} ", word.word) }</span>
                }
            }) }
            <style>
                {r#"
                    .text-reveal-word {
                        display: inline-block;
                        opacity: 0;
                        white-space: pre;
                    }
                    @keyframes text-reveal {
                        to { opacity: 1; filter: blur(0); }
                    }
                "#}
            </style>
        </span>
    }
}
