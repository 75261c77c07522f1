use std::collections::HashMap;

use sheetfront_core::group::Grouped;
use sheetfront_core::sections::inquiry::{self, FieldType, FormField};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::Remote;
use crate::config::SiteConfig;
use crate::{clipboard, net};

const LOAD_ERROR: &str = "문의 양식을 불러오지 못했습니다.";
const COPIED: &str = "문의 내용이 복사되었습니다. 채팅창에 붙여넣어 주세요.";
const COPY_FAILED: &str = "복사에 실패했습니다. 직접 선택해 복사해 주세요.";

async fn load() -> Result<Vec<Grouped<FormField>>, net::LoadError> {
    let site = SiteConfig::shared();
    let csv = net::fetch_csv(&site.sheet_url(&site.sheets.inquiry)).await?;
    Ok(inquiry::build(&csv)?)
}

/// Field values keyed by the schema key, in sheet-defined display order,
/// paired with their labels for the summary.
fn entries_in_order(
    groups: &[Grouped<FormField>],
    values: &HashMap<String, String>,
) -> Vec<(String, String)> {
    groups
        .iter()
        .flat_map(|group| group.items.iter())
        .map(|field| {
            let value = values.get(&field.key).cloned().unwrap_or_default();
            (field.label.clone(), value)
        })
        .collect()
}

// Checkbox groups join their picks into one comma-separated value.
fn toggle_choice(current: &str, choice: &str, on: bool) -> String {
    let mut parts: Vec<&str> = current
        .split(", ")
        .filter(|part| !part.is_empty() && *part != choice)
        .collect();
    if on {
        parts.push(choice);
    }
    parts.join(", ")
}

#[function_component(InquirySection)]
pub fn inquiry_section() -> Html {
    let state = use_state(|| Remote::Loading);
    let values = use_state(HashMap::<String, String>::new);
    let status = use_state(|| None::<&'static str>);
    {
        let state = state.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match load().await {
                    Ok(groups) => state.set(Remote::Ready(groups)),
                    Err(err) => {
                        log::warn!("inquiry load failed: {err}");
                        state.set(Remote::Failed);
                    }
                }
            });
            || {}
        });
    }

    let on_copy = {
        let state = state.clone();
        let values = values.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let Remote::Ready(groups) = &*state else {
                return;
            };
            let summary = inquiry::summary(&entries_in_order(groups, &values));
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match clipboard::copy_text(&summary).await {
                    Ok(()) => status.set(Some(COPIED)),
                    Err(err) => {
                        log::warn!("inquiry copy failed: {err}");
                        status.set(Some(COPY_FAILED));
                    }
                }
            });
        })
    };

    html! {
        <section id="inquiry" class="inquiry">
            <h2 class="section__title">{ "문의하기" }</h2>
            { match &*state {
                Remote::Loading => html! { <div class="section__loading" aria-busy="true"></div> },
                Remote::Failed => html! { <div class="inquiry__error">{ LOAD_ERROR }</div> },
                Remote::Ready(groups) => html! {
                    <form class="inquiryForm" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        { for groups.iter().map(|group| render_group(group, &values)) }
                        <div class="inquiryForm__actions">
                            <button type="button" class="inquiryForm__copy" onclick={on_copy.clone()}>
                                { "문의 내용 복사하기" }
                            </button>
                            { status.map_or_else(Html::default, |message| html! {
                                <p class="inquiryForm__status" aria-live="polite">{ message }</p>
                            }) }
                        </div>
                    </form>
                },
            } }
        </section>
    }
}

fn render_group(group: &Grouped<FormField>, values: &UseStateHandle<HashMap<String, String>>) -> Html {
    html! {
        <fieldset class="inquiryGroup">
            <legend class="inquiryGroup__title">{ group.key.clone() }</legend>
            { for group.items.iter().map(|field| render_field(field, values)) }
        </fieldset>
    }
}

fn set_value(values: &UseStateHandle<HashMap<String, String>>, key: &str, value: String) {
    let mut next = (**values).clone();
    next.insert(key.to_string(), value);
    values.set(next);
}

fn render_field(field: &FormField, values: &UseStateHandle<HashMap<String, String>>) -> Html {
    let current = values.get(&field.key).cloned().unwrap_or_default();
    let control = match field.field_type {
        FieldType::Text => render_text(field, &current, values),
        FieldType::Textarea => render_textarea(field, &current, values),
        FieldType::Select => render_select(field, &current, values),
        FieldType::Radio => render_radio(field, &current, values),
        FieldType::Checkbox => render_checkbox(field, &current, values),
    };

    html! {
        <div class="inquiryField">
            <label class="inquiryField__label" for={field.key.clone()}>{ field.label.clone() }</label>
            { control }
        </div>
    }
}

fn render_text(
    field: &FormField,
    current: &str,
    values: &UseStateHandle<HashMap<String, String>>,
) -> Html {
    let oninput = {
        let values = values.clone();
        let key = field.key.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                set_value(&values, &key, input.value());
            }
        })
    };
    html! {
        <input
            type="text"
            id={field.key.clone()}
            value={current.to_string()}
            placeholder={field.placeholder.clone()}
            oninput={oninput}
        />
    }
}

fn render_textarea(
    field: &FormField,
    current: &str,
    values: &UseStateHandle<HashMap<String, String>>,
) -> Html {
    let oninput = {
        let values = values.clone();
        let key = field.key.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                set_value(&values, &key, area.value());
            }
        })
    };
    html! {
        <textarea
            id={field.key.clone()}
            value={current.to_string()}
            placeholder={field.placeholder.clone()}
            oninput={oninput}
        ></textarea>
    }
}

fn render_select(
    field: &FormField,
    current: &str,
    values: &UseStateHandle<HashMap<String, String>>,
) -> Html {
    let onchange = {
        let values = values.clone();
        let key = field.key.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                set_value(&values, &key, select.value());
            }
        })
    };
    html! {
        <select id={field.key.clone()} onchange={onchange}>
            <option value="" selected={current.is_empty()}>{ "선택해 주세요" }</option>
            { for field.choices().into_iter().map(|choice| {
                let selected = choice == current;
                html! { <option value={choice.clone()} selected={selected}>{ choice }</option> }
            }) }
        </select>
    }
}

fn render_radio(
    field: &FormField,
    current: &str,
    values: &UseStateHandle<HashMap<String, String>>,
) -> Html {
    html! {
        <div class="inquiryField__choices" role="radiogroup" aria-label={field.label.clone()}>
            { for field.choices().into_iter().map(|choice| {
                let checked = choice == current;
                let onchange = {
                    let values = values.clone();
                    let key = field.key.clone();
                    let choice = choice.clone();
                    Callback::from(move |_: Event| set_value(&values, &key, choice.clone()))
                };
                html! {
                    <label class="choice">
                        <input type="radio" name={field.key.clone()} checked={checked} onchange={onchange} />
                        <span>{ choice }</span>
                    </label>
                }
            }) }
        </div>
    }
}

fn render_checkbox(
    field: &FormField,
    current: &str,
    values: &UseStateHandle<HashMap<String, String>>,
) -> Html {
    html! {
        <div class="inquiryField__choices">
            { for field.choices().into_iter().map(|choice| {
                let checked = current.split(", ").any(|part| part == choice);
                let onchange = {
                    let values = values.clone();
                    let key = field.key.clone();
                    let choice = choice.clone();
                    Callback::from(move |e: Event| {
                        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                            let joined = {
                                let current = values.get(&key).cloned().unwrap_or_default();
                                toggle_choice(&current, &choice, input.checked())
                            };
                            set_value(&values, &key, joined);
                        }
                    })
                };
                html! {
                    <label class="choice">
                        <input type="checkbox" checked={checked} onchange={onchange} />
                        <span>{ choice }</span>
                    </label>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetfront_core::group::Grouped;

    fn field(key: &str, label: &str) -> FormField {
        FormField {
            key: key.to_string(),
            label: label.to_string(),
            ..FormField::default()
        }
    }

    #[test]
    fn toggle_choice_adds_and_removes_picks() {
        assert_eq!(toggle_choice("", "로고", true), "로고");
        assert_eq!(toggle_choice("로고", "지도", true), "로고, 지도");
        assert_eq!(toggle_choice("로고, 지도", "로고", false), "지도");
        assert_eq!(toggle_choice("지도", "지도", false), "");
        // re-checking an already-present pick does not duplicate it
        assert_eq!(toggle_choice("지도", "지도", true), "지도");
    }

    #[test]
    fn entries_keep_schema_order_and_blank_values() {
        let groups = vec![
            Grouped {
                key: "기본".to_string(),
                items: vec![field("name", "성함"), field("contact", "연락처")],
            },
            Grouped {
                key: "요청".to_string(),
                items: vec![field("details", "상세 내용")],
            },
        ];
        let mut values = HashMap::new();
        values.insert("contact".to_string(), "010-0000-0000".to_string());

        let entries = entries_in_order(&groups, &values);
        assert_eq!(
            entries,
            vec![
                ("성함".to_string(), String::new()),
                ("연락처".to_string(), "010-0000-0000".to_string()),
                ("상세 내용".to_string(), String::new()),
            ]
        );
    }
}
