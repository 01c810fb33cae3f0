use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Страницы приложения; ключ хранится в `?page=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Overview,
    Transactions,
    Charts,
    Forecast,
    Classification,
    Clustering,
}

impl Page {
    pub fn all() -> [Page; 6] {
        [
            Self::Overview,
            Self::Transactions,
            Self::Charts,
            Self::Forecast,
            Self::Classification,
            Self::Clustering,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Overview => "d400_overview",
            Self::Transactions => "a001_transaction",
            Self::Charts => "d401_charts",
            Self::Forecast => "d402_forecast",
            Self::Classification => "d403_classification",
            Self::Clustering => "d404_clustering",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Transactions => "Transactions",
            Self::Charts => "Charts",
            Self::Forecast => "Forecast",
            Self::Classification => "Classification",
            Self::Clustering => "Clustering",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Overview => "dashboard",
            Self::Transactions => "transactions",
            Self::Charts => "charts",
            Self::Forecast => "forecast",
            Self::Classification => "classification",
            Self::Clustering => "clustering",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.key() == key)
    }
}

/// Page from a query string like `?page=d401_charts`; unknown keys fall back
/// to the overview
pub fn page_from_query(search: &str) -> Page {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("page")
        .and_then(|key| Page::from_key(key))
        .unwrap_or_default()
}

pub fn page_to_query(page: Page) -> String {
    let query = serde_qs::to_string(&HashMap::from([("page", page.key())])).unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the page from the URL and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(page_from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = page_to_query(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
