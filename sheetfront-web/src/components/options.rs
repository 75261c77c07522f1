use sheetfront_core::sections::options::{self, AddOn};
use sheetfront_core::text;
use yew::prelude::*;

use super::{Remote, raw_html};
use crate::config::SiteConfig;
use crate::net;

const LOAD_ERROR: &str = "추가 옵션을 불러오지 못했습니다.";

async fn load() -> Result<Vec<AddOn>, net::LoadError> {
    let site = SiteConfig::shared();
    let csv = net::fetch_csv(&site.sheet_url(&site.sheets.options)).await?;
    Ok(options::build(&csv)?)
}

#[function_component(OptionsSection)]
pub fn options_section() -> Html {
    let state = use_state(|| Remote::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match load().await {
                    Ok(items) => state.set(Remote::Ready(items)),
                    Err(err) => {
                        log::warn!("options load failed: {err}");
                        state.set(Remote::Failed);
                    }
                }
            });
            || {}
        });
    }

    html! {
        <section id="options" class="options">
            <h2 class="section__title">{ "추가 옵션" }</h2>
            { match &*state {
                Remote::Loading => html! { <div class="section__loading" aria-busy="true"></div> },
                Remote::Failed => html! { <div class="options__error">{ LOAD_ERROR }</div> },
                Remote::Ready(items) => html! {
                    <ul class="optionList">
                        { for items.iter().map(render_item) }
                    </ul>
                },
            } }
        </section>
    }
}

fn render_item(item: &AddOn) -> Html {
    html! {
        <li class="optionItem">
            <div class="optionItem__info">
                <span class="optionItem__label">{ item.label.clone() }</span>
                <span class="optionItem__desc">{ raw_html(&text::with_breaks(&item.desc)) }</span>
            </div>
            <span class="optionItem__price">{ item.price_text() }</span>
        </li>
    }
}
