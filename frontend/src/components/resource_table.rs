//! 列表页：会员 / 明信片类型 / 位置
//!
//! 列由第一行数据的字段决定，单元格按原样显示。

use crate::auth::use_auth;
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use postcard_admin::Paginator;
use postcard_admin::shared::protocol::{
    ListLocationsRequest, ListPostcardTypesRequest, ListUsersRequest,
};
use serde_json::Value;
use std::collections::BTreeMap;

const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];
const KEYWORD_FILTER: &str = "keyword";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    PostcardTypes,
    Locations,
}

impl Resource {
    fn title(&self) -> &'static str {
        match self {
            Resource::Users => "會員列表",
            Resource::PostcardTypes => "明信片類型列表",
            Resource::Locations => "位置列表",
        }
    }
}

/// Paginator 状态的响应式镜像
#[derive(Clone, Copy)]
struct TableView {
    rows: RwSignal<Vec<Value>>,
    total: RwSignal<u64>,
    page: RwSignal<u32>,
    limit: RwSignal<u32>,
    page_count: RwSignal<u64>,
    loading: RwSignal<bool>,
}

impl TableView {
    fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            page: RwSignal::new(1),
            limit: RwSignal::new(PAGE_SIZES[0]),
            page_count: RwSignal::new(1),
            loading: RwSignal::new(false),
        }
    }

    fn sync(&self, p: &Paginator<Value>) {
        self.rows.set(p.rows());
        self.total.set(p.total());
        self.page.set(p.page());
        self.limit.set(p.limit());
        self.page_count.set(p.page_count());
        self.loading.set(p.is_loading());
    }
}

fn columns(rows: &[Value]) -> Vec<String> {
    rows.first()
        .and_then(Value::as_object)
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[component]
pub fn ResourceTable(resource: Resource) -> impl IntoView {
    let auth = use_auth();
    let admin = auth.admin();

    let client = admin.client().clone();
    let paginator = Paginator::new(
        move |query| {
            let client = client.clone();
            async move {
                match resource {
                    Resource::Users => client.request(&ListUsersRequest::from(query)).await,
                    Resource::PostcardTypes => {
                        client.request(&ListPostcardTypesRequest::from(query)).await
                    }
                    Resource::Locations => {
                        client.request(&ListLocationsRequest::from(query)).await
                    }
                }
            }
            .boxed_local()
        },
        admin.notifier().clone(),
    );
    let paginator = StoredValue::new_local(paginator);

    let table = TableView::new();
    let (keyword, set_keyword) = signal(String::new());

    // 执行一次分页操作并同步界面
    let run = move |action: fn(Paginator<Value>) -> futures::future::LocalBoxFuture<'static, ()>| {
        let p = paginator.get_value();
        table.loading.set(true);
        spawn_local(async move {
            action(p.clone()).await;
            table.sync(&p);
        });
    };

    run(|p| async move { p.get_data().await }.boxed_local());

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut filters = BTreeMap::new();
        let text = keyword.get_untracked().trim().to_string();
        if !text.is_empty() {
            filters.insert(KEYWORD_FILTER.to_string(), text);
        }
        paginator.with_value(|p| p.set_filters(filters));
        run(|p| async move { p.submit_search().await }.boxed_local());
    };

    let go_to = move |page: u32| {
        let p = paginator.get_value();
        spawn_local(async move {
            p.set_page(page).await;
            table.sync(&p);
        });
    };

    let on_limit = move |ev: leptos::ev::Event| {
        let Ok(limit) = event_target_value(&ev).parse::<u32>() else {
            return;
        };
        let p = paginator.get_value();
        spawn_local(async move {
            p.set_limit(limit).await;
            table.sync(&p);
        });
    };

    let header = move || table.rows.with(|rows| columns(rows));

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex flex-wrap items-center justify-between gap-2 p-6 pb-2">
                    <h3 class="card-title">{resource.title()}</h3>
                    <form class="join" on:submit=on_search>
                        <input
                            type="text"
                            placeholder="搜尋"
                            class="input input-bordered input-sm join-item"
                            on:input=move |ev| set_keyword.set(event_target_value(&ev))
                            prop:value=keyword
                        />
                        <button class="btn btn-sm join-item">"搜尋"</button>
                    </form>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                {move || header().into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || table.loading.get()>
                                <tr>
                                    <td class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span> " 載入中..."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !table.loading.get() && table.rows.with(Vec::is_empty)>
                                <tr>
                                    <td class="text-center py-8 text-base-content/50">"暫無資料"</td>
                                </tr>
                            </Show>
                            {move || {
                                let cols = header();
                                table
                                    .rows
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        let cells = cols
                                            .iter()
                                            .map(|c| view! { <td>{cell_text(row.get(c))}</td> })
                                            .collect_view();
                                        view! { <tr>{cells}</tr> }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="flex flex-wrap items-center justify-end gap-4 p-4">
                    <span class="text-sm">{move || format!("共 {} 筆", table.total.get())}</span>
                    <select class="select select-bordered select-sm" on:change=on_limit>
                        {PAGE_SIZES
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option value=size.to_string() selected=move || table.limit.get() == size>
                                        {format!("{} 個/筆", size)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <div class="join">
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || table.page.get() <= 1
                            on:click=move |_| go_to(table.page.get_untracked().saturating_sub(1))
                        >
                            "«"
                        </button>
                        <button class="join-item btn btn-sm">
                            {move || format!("{} / {} 頁", table.page.get(), table.page_count.get())}
                        </button>
                        <button
                            class="join-item btn btn-sm"
                            disabled=move || u64::from(table.page.get()) >= table.page_count.get()
                            on:click=move |_| go_to(table.page.get_untracked() + 1)
                        >
                            "»"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
