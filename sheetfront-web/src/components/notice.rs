use sheetfront_core::group::Grouped;
use sheetfront_core::sections::notice::{self, Notice};
use sheetfront_core::text;
use yew::prelude::*;

use super::{Remote, raw_html};
use crate::config::SiteConfig;
use crate::{collate, net};

const LOAD_ERROR: &str = "안내사항을 불러오지 못했습니다. (시트 공개/탭/헤더 확인)";
const EMPTY: &str = "표시할 안내사항이 없습니다.";

async fn load() -> Result<Vec<Grouped<Notice>>, net::LoadError> {
    let site = SiteConfig::shared();
    let csv = net::fetch_csv(&site.sheet_url(&site.sheets.notice)).await?;
    Ok(notice::build(&csv, collate::korean)?)
}

#[function_component(NoticeSection)]
pub fn notice_section() -> Html {
    let state = use_state(|| Remote::Loading);
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match load().await {
                    Ok(groups) => state.set(Remote::Ready(groups)),
                    Err(err) => {
                        log::warn!("notice load failed: {err}");
                        state.set(Remote::Failed);
                    }
                }
            });
            || {}
        });
    }

    html! {
        <section id="notice" class="notice">
            <h2 class="section__title">{ "안내사항" }</h2>
            { match &*state {
                Remote::Loading => html! { <div class="section__loading" aria-busy="true"></div> },
                Remote::Failed => html! { <div class="notice__error">{ LOAD_ERROR }</div> },
                Remote::Ready(groups) if groups.is_empty() =>
                    html! { <div class="notice__error">{ EMPTY }</div> },
                Remote::Ready(groups) =>
                    html! { <div class="notice__groups">{ for groups.iter().map(render_group) }</div> },
            } }
        </section>
    }
}

fn render_group(group: &Grouped<Notice>) -> Html {
    html! {
        <section class="noticeGroup">
            <header class="noticeGroup__head">
                <h4 class="noticeGroup__title">{ group.key.clone() }</h4>
            </header>
            <ul class="noticeList">
                { for group.items.iter().map(|item| html! {
                    <li class="noticeItem">
                        <div class="noticeItem__dot" aria-hidden="true"></div>
                        <div class="noticeItem__body">{ raw_html(&text::with_breaks(&item.desc)) }</div>
                    </li>
                }) }
            </ul>
        </section>
    }
}
