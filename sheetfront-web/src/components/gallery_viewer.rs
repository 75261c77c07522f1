use sheetfront_core::ViewerState;
use yew::prelude::*;

/// The shared modal slider. Everything shown here is a pure function of
/// [`ViewerState`]; the owning section holds the state and the callbacks
/// perform the transitions.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: ViewerState,
    pub on_close: Callback<()>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_jump: Callback<usize>,
}

#[function_component(GalleryViewer)]
pub fn gallery_viewer(props: &Props) -> Html {
    let Some((group, index)) = props.state.current() else {
        return Html::default();
    };
    let slide = &group.slides[index];

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_prev = {
        let cb = props.on_prev.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let on_keydown = {
        let close = props.on_close.clone();
        let prev = props.on_prev.clone();
        let next = props.on_next.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" => {
                e.prevent_default();
                close.emit(());
            }
            "ArrowLeft" => prev.emit(()),
            "ArrowRight" => next.emit(()),
            _ => {}
        })
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="viewer-backdrop" role="presentation" onclick={on_close.clone()} onkeydown={on_keydown}>
            <div class="viewer" role="dialog" aria-modal="true" aria-label={group.key.clone()} tabindex="-1" onclick={swallow_click}>
                <div class="viewer__header">
                    <h3 class="viewer__title">{ group.key.clone() }</h3>
                    <button type="button" class="viewer__close" aria-label="닫기" onclick={on_close.clone()}>
                        {"X"}
                    </button>
                </div>
                <div class="viewer__stage">
                    <button type="button" class="viewer__nav viewer__nav--prev" aria-label="이전 슬라이드" onclick={on_prev}>
                        {"‹"}
                    </button>
                    <img class="viewer__image" src={slide.image.clone()} alt={slide.name.clone()} />
                    <button type="button" class="viewer__nav viewer__nav--next" aria-label="다음 슬라이드" onclick={on_next}>
                        {"›"}
                    </button>
                </div>
                <div class="viewer__caption">
                    <span class="viewer__name">{ slide.name.clone() }</span>
                    { if slide.package.is_empty() { Html::default() } else {
                        html! { <span class="badge">{ slide.package.clone() }</span> }
                    } }
                    { if slide.note.is_empty() { Html::default() } else {
                        html! { <span class="viewer__note">{ slide.note.clone() }</span> }
                    } }
                    { for slide.tags.iter().map(|tag| html! { <span class="tag">{ tag.clone() }</span> }) }
                </div>
                <div class="viewer__dots" role="tablist">
                    { for (0..group.slides.len()).map(|dot| {
                        let is_active = dot == index;
                        let on_jump = {
                            let cb = props.on_jump.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                cb.emit(dot);
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("viewer__dot", is_active.then_some("viewer__dot--active"))}
                                aria-label={format!("{}번 슬라이드로 이동", dot + 1)}
                                aria-pressed={is_active.to_string()}
                                onclick={on_jump}
                            ></button>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
