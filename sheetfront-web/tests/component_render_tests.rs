use futures::executor::block_on;
use sheetfront_core::gallery::{GalleryGroup, Slide};
use sheetfront_core::ViewerState;
use sheetfront_web::app::App;
use sheetfront_web::components::gallery_viewer::{GalleryViewer, Props as ViewerProps};
use yew::{Callback, LocalServerRenderer};

fn sample_group() -> GalleryGroup {
    GalleryGroup {
        key: "메인".to_string(),
        slides: (1..=5)
            .map(|i| Slide {
                key: format!("t{i}"),
                name: format!("템플릿 {i}"),
                package: "스탠다드".to_string(),
                section: "메인".to_string(),
                image: format!("https://example.com/{i}.png"),
                tags: vec!["반응형".to_string()],
                order: f64::from(i),
                ..Slide::default()
            })
            .collect(),
    }
}

#[test]
fn app_renders_every_section_shell() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    for id in [
        "notice",
        "packages",
        "options",
        "templates",
        "portfolio",
        "faq",
        "inquiry",
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
    }
}

#[test]
fn sections_start_in_the_loading_state() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("section__loading"));
    // no section may show its failure copy before a load has even run
    assert!(!html.contains("불러오지 못했습니다"));
}

#[test]
fn viewer_renders_nothing_while_closed() {
    let props = ViewerProps {
        state: ViewerState::Closed,
        on_close: Callback::noop(),
        on_prev: Callback::noop(),
        on_next: Callback::noop(),
        on_jump: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GalleryViewer>::with_props(props).render());
    assert!(!html.contains("viewer-backdrop"));
}

#[test]
fn viewer_shows_the_current_slide_and_dots() {
    let state = ViewerState::open(sample_group()).unwrap().next();
    let props = ViewerProps {
        state,
        on_close: Callback::noop(),
        on_prev: Callback::noop(),
        on_next: Callback::noop(),
        on_jump: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GalleryViewer>::with_props(props).render());
    assert!(html.contains("viewer-backdrop"));
    assert!(html.contains("https://example.com/2.png"));
    assert!(html.contains("템플릿 2"));
    assert_eq!(html.matches("번 슬라이드로 이동").count(), 5);
    assert_eq!(html.matches("viewer__dot--active").count(), 1);
}
