use sheetfront_core::sections::packages::{self, PackageRow};
use yew::prelude::*;

use super::Remote;
use crate::config::SiteConfig;
use crate::net;

const LOAD_ERROR: &str = "패키지 정보를 불러오지 못했습니다.";

const PLAN_HEADS: [&str; 4] = ["베이직", "스탠다드", "프리미엄", "커스텀"];

async fn load() -> Result<Vec<PackageRow>, net::LoadError> {
    let site = SiteConfig::shared();
    let csv = net::fetch_csv(&site.sheet_url(&site.sheets.packages)).await?;
    Ok(packages::build(&csv)?)
}

#[function_component(PackagesSection)]
pub fn packages_section() -> Html {
    let state = use_state(|| Remote::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match load().await {
                    Ok(rows) => state.set(Remote::Ready(rows)),
                    Err(err) => {
                        log::warn!("packages load failed: {err}");
                        state.set(Remote::Failed);
                    }
                }
            });
            || {}
        });
    }

    html! {
        <section id="packages" class="packages">
            <h2 class="section__title">{ "패키지 비교" }</h2>
            { match &*state {
                Remote::Loading => html! { <div class="section__loading" aria-busy="true"></div> },
                Remote::Failed => html! { <div class="packages__error">{ LOAD_ERROR }</div> },
                Remote::Ready(rows) => render_table(rows),
            } }
        </section>
    }
}

fn render_table(rows: &[PackageRow]) -> Html {
    html! {
        <div class="packages__scroll">
            <table class="packageTable">
                <thead>
                    <tr>
                        <th scope="col">{ "항목" }</th>
                        { for PLAN_HEADS.iter().map(|head| html! { <th scope="col">{ *head }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(render_row) }
                </tbody>
            </table>
        </div>
    }
}

fn render_row(row: &PackageRow) -> Html {
    html! {
        <tr data-key={row.key.clone()}>
            <th scope="row">
                <span class="packageTable__label">{ row.label.clone() }</span>
                { if row.desc.is_empty() { Html::default() } else {
                    html! { <span class="packageTable__desc">{ row.desc.clone() }</span> }
                } }
            </th>
            <td>{ row.basic.clone() }</td>
            <td>{ row.standard.clone() }</td>
            <td>{ row.premium.clone() }</td>
            <td>{ row.custom.clone() }</td>
        </tr>
    }
}
