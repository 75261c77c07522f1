use sheetfront_core::group::Grouped;
use sheetfront_core::sections::faq::{self, FaqEntry};
use sheetfront_core::text;
use yew::prelude::*;

use super::{Remote, raw_html};
use crate::config::SiteConfig;
use crate::net;

const LOAD_ERROR: &str = "자주 묻는 질문을 불러오지 못했습니다.";

async fn load() -> Result<Vec<Grouped<FaqEntry>>, net::LoadError> {
    let site = SiteConfig::shared();
    let csv = net::fetch_csv(&site.sheet_url(&site.sheets.faq)).await?;
    Ok(faq::build(&csv)?)
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let state = use_state(|| Remote::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match load().await {
                    Ok(groups) => state.set(Remote::Ready(groups)),
                    Err(err) => {
                        log::warn!("faq load failed: {err}");
                        state.set(Remote::Failed);
                    }
                }
            });
            || {}
        });
    }

    html! {
        <section id="faq" class="faq">
            <h2 class="section__title">{ "자주 묻는 질문" }</h2>
            { match &*state {
                Remote::Loading => html! { <div class="section__loading" aria-busy="true"></div> },
                Remote::Failed => html! { <div class="faq__error">{ LOAD_ERROR }</div> },
                Remote::Ready(groups) => html! {
                    <div class="faq__groups">{ for groups.iter().map(render_group) }</div>
                },
            } }
        </section>
    }
}

fn render_group(group: &Grouped<FaqEntry>) -> Html {
    html! {
        <section class="faqGroup">
            <h4 class="faqGroup__title">{ group.key.clone() }</h4>
            { for group.items.iter().map(|entry| html! {
                <details class="faqItem" key={entry.key.clone()}>
                    <summary class="faqItem__question">{ entry.question.clone() }</summary>
                    <div class="faqItem__answer">{ raw_html(&text::with_breaks(&entry.answer)) }</div>
                </details>
            }) }
        </section>
    }
}
