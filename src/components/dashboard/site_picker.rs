use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::forecast::{self, SiteEntry};
use crate::common::error::ErrorDisplay;
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: String,
    pub on_select: Callback<String>,
}

/// Site selector backed by the server's site list, with a substring filter.
#[function_component(SitePicker)]
pub fn site_picker(props: &Props) -> Html {
    let query = use_state(String::new);
    let refresh = use_state(|| 0u32);
    let sites = use_state(FetchState::<Vec<SiteEntry>>::default);

    {
        let sites = sites.clone();
        use_effect_with(((*query).clone(), *refresh), move |(q, _)| {
            let q = q.clone();
            sites.set(FetchState::Loading);
            spawn_local(async move {
                match forecast::get_sites(&q).await {
                    Ok(list) => {
                        log::debug!("Fetched {} sites", list.len());
                        sites.set(FetchState::Success(list));
                    }
                    Err(e) => sites.set(FetchState::Error(e)),
                }
            });
            || ()
        });
    }

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            query.set(v);
        })
    };

    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let v = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_select.emit(v);
        })
    };

    let on_retry = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.set(*refresh + 1))
    };

    html! {
        <div class="flex flex-col gap-1 flex-1">
            <label class="label-text font-semibold">{"Site"}</label>
            <div class="flex gap-2">
                <input
                    class="input input-bordered input-sm w-40"
                    placeholder="Filter..."
                    value={(*query).clone()}
                    oninput={on_query}
                />
                {match &*sites {
                    FetchState::Success(list) => html! {
                        <select class="select select-bordered select-sm flex-1" onchange={on_change}>
                            <option value="" selected={props.selected.is_empty()}>{"-- choose a site --"}</option>
                            {for list.iter().map(|s| html! {
                                <option value={s.id.clone()} selected={s.id == props.selected}>
                                    {&s.text}
                                </option>
                            })}
                        </select>
                    },
                    FetchState::Error(_) => html! {},
                    _ => html! {
                        <select class="select select-bordered select-sm flex-1" disabled=true>
                            <option>{"Loading sites..."}</option>
                        </select>
                    },
                }}
            </div>
            if let FetchState::Error(err) = &*sites {
                <ErrorDisplay message={err.clone()} on_retry={Some(on_retry)} />
            }
        </div>
    }
}
