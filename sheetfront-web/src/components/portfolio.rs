use sheetfront_core::sections::portfolio::{self, PortfolioItem};
use yew::prelude::*;

use super::Remote;
use crate::config::SiteConfig;
use crate::net;

const LOAD_ERROR: &str = "포트폴리오를 불러오지 못했습니다.";

async fn load() -> Result<Vec<PortfolioItem>, net::LoadError> {
    let site = SiteConfig::shared();
    let csv = net::fetch_csv(&site.sheet_url(&site.sheets.portfolio)).await?;
    Ok(portfolio::build(&csv)?)
}

#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    let state = use_state(|| Remote::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match load().await {
                    Ok(items) => state.set(Remote::Ready(items)),
                    Err(err) => {
                        log::warn!("portfolio load failed: {err}");
                        state.set(Remote::Failed);
                    }
                }
            });
            || {}
        });
    }

    html! {
        <section id="portfolio" class="portfolio">
            <h2 class="section__title">{ "포트폴리오" }</h2>
            { match &*state {
                Remote::Loading => html! { <div class="section__loading" aria-busy="true"></div> },
                Remote::Failed => html! { <div class="portfolio__error">{ LOAD_ERROR }</div> },
                Remote::Ready(items) => html! {
                    <div class="portfolioGrid">{ for items.iter().map(render_card) }</div>
                },
            } }
        </section>
    }
}

fn render_card(item: &PortfolioItem) -> Html {
    let badges = [&item.package, &item.section, &item.kind];
    html! {
        <a class="portfolioCard" href={item.link.clone()} target="_blank" rel="noreferrer">
            { if item.image.is_empty() { Html::default() } else {
                html! { <img class="portfolioCard__image" src={item.image.clone()} alt={item.name.clone()} loading="lazy" /> }
            } }
            <div class="portfolioCard__body">
                <span class="portfolioCard__name">{ item.name.clone() }</span>
                <div class="portfolioCard__badges">
                    { for badges.iter().filter(|b| !b.is_empty()).map(|badge| html! {
                        <span class="badge">{ (*badge).clone() }</span>
                    }) }
                </div>
            </div>
        </a>
    }
}
