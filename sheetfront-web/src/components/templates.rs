use sheetfront_core::gallery::GalleryGroup;
use sheetfront_core::sections::templates;
use sheetfront_core::ViewerState;
use yew::prelude::*;

use super::Remote;
use super::gallery_viewer::GalleryViewer;
use crate::config::SiteConfig;
use crate::net;

const LOAD_ERROR: &str = "템플릿을 불러오지 못했습니다.";
const EMPTY: &str = "준비 중인 템플릿입니다.";

async fn load() -> Result<Vec<GalleryGroup>, net::LoadError> {
    let site = SiteConfig::shared();
    let csv = net::fetch_csv(&site.sheet_url(&site.sheets.templates)).await?;
    Ok(templates::build(&csv)?)
}

#[function_component(TemplatesSection)]
pub fn templates_section() -> Html {
    let state = use_state(|| Remote::Loading);
    let viewer = use_state(ViewerState::default);
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match load().await {
                    Ok(groups) => state.set(Remote::Ready(groups)),
                    Err(err) => {
                        log::warn!("templates load failed: {err}");
                        state.set(Remote::Failed);
                    }
                }
            });
            || {}
        });
    }

    let on_close = {
        let viewer = viewer.clone();
        Callback::from(move |()| viewer.set(viewer.close()))
    };
    let on_prev = {
        let viewer = viewer.clone();
        Callback::from(move |()| viewer.set(viewer.prev()))
    };
    let on_next = {
        let viewer = viewer.clone();
        Callback::from(move |()| viewer.set(viewer.next()))
    };
    let on_jump = {
        let viewer = viewer.clone();
        Callback::from(move |index: usize| viewer.set(viewer.jump(index)))
    };

    html! {
        <section id="templates" class="templates">
            <h2 class="section__title">{ "템플릿 갤러리" }</h2>
            { match &*state {
                Remote::Loading => html! { <div class="section__loading" aria-busy="true"></div> },
                Remote::Failed => html! { <div class="templates__error">{ LOAD_ERROR }</div> },
                Remote::Ready(groups) if groups.is_empty() =>
                    html! { <div class="templates__error">{ EMPTY }</div> },
                Remote::Ready(groups) => html! {
                    <div class="templateGrid">
                        { for groups.iter().map(|group| render_card(group, &viewer)) }
                    </div>
                },
            } }
            <GalleryViewer
                state={(*viewer).clone()}
                on_close={on_close}
                on_prev={on_prev}
                on_next={on_next}
                on_jump={on_jump}
            />
        </section>
    }
}

fn render_card(group: &GalleryGroup, viewer: &UseStateHandle<ViewerState>) -> Html {
    let cover = group
        .slides
        .first()
        .map(|slide| slide.image.clone())
        .unwrap_or_default();
    let onclick = {
        let viewer = viewer.clone();
        let group = group.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(opened) = ViewerState::open(group.clone()) {
                viewer.set(opened);
            }
        })
    };

    html! {
        <button type="button" class="templateCard" onclick={onclick}>
            <img class="templateCard__cover" src={cover} alt={group.key.clone()} loading="lazy" />
            <div class="templateCard__body">
                <span class="templateCard__name">{ group.key.clone() }</span>
                <span class="templateCard__count">{ format!("{}종", group.slides.len()) }</span>
            </div>
        </button>
    }
}
