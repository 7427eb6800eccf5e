use std::sync::OnceLock;

use dioxus::{prelude::*, signals::Signal};
use rand::{rngs::StdRng, SeedableRng};

use home_value_oracle::{
    domain::{estimate, AppState, PropertyAttributes, UniformJitter, User},
    infra::{LoginRequest, PlatformStore, PredictionStore, SessionManager, StorageError},
    util::{assets, config::AppConfig, version::APP_NAME},
};

use crate::ui::{
    components::toast::{push_toast, Toast, ToastKind, ToastMessage},
    pages::{DashboardPage, HomePage, LoginPage},
    shell::Shell,
};

/// Jitter source shared by every estimate in the session.
pub type Jitter = UniformJitter<StdRng>;

/// `None` when no storage backend could be opened; estimates still work,
/// saving and signing in do not.
pub type StoreSlot = Signal<Option<PlatformStore>>;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Must run before launch; later calls are ignored.
pub fn install_config(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("app config already installed");
    }
}

fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
}

#[component]
pub fn App() -> Element {
    let config = app_config();

    let store: StoreSlot = use_signal(|| match config.open_store() {
        Ok(store) => Some(store),
        Err(err) => {
            tracing::error!("prediction storage unavailable: {err}");
            None
        }
    });
    let jitter = use_signal(|| {
        let rng = match config.jitter_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        UniformJitter::new(rng)
    });
    let state = use_signal(AppState::default);
    let toasts = use_signal(Vec::<ToastMessage>::new);

    use_hook(move || restore_session(state, store));

    use_context_provider(|| state);
    use_context_provider(|| store);
    use_context_provider(|| jitter);
    use_context_provider(|| toasts);

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

fn with_store<T>(mut store: StoreSlot, f: impl FnOnce(&mut PlatformStore) -> T) -> Option<T> {
    store.with_mut(|slot| slot.as_mut().map(f))
}

fn restore_session(mut state: Signal<AppState>, store: StoreSlot) {
    let restored = with_store(store, |backend| {
        let user = SessionManager::new(&mut *backend).current_user()?;
        let saved = PredictionStore::new(&mut *backend).list(&user.id);
        Some((user, saved))
    })
    .flatten();

    if let Some((user, saved)) = restored {
        tracing::info!(uid = %user.id, saved = saved.len(), "restored session");
        state.with_mut(|st| st.sign_in(user, saved));
    }
}

/// Runs the valuation and puts the result on screen.
pub fn run_estimate(
    mut state: Signal<AppState>,
    mut jitter: Signal<Jitter>,
    attrs: PropertyAttributes,
) -> f64 {
    let price = jitter.with_mut(|source| estimate(&attrs, source));
    state.with_mut(|st| st.show_prediction(Some(attrs), price));
    price
}

pub fn sign_in(
    mut state: Signal<AppState>,
    store: StoreSlot,
    request: LoginRequest,
) -> Result<User, StorageError> {
    let result = with_store(store, |backend| -> Result<_, StorageError> {
        let user = SessionManager::new(&mut *backend).login(request)?;
        let saved = PredictionStore::new(&mut *backend).list(&user.id);
        Ok((user, saved))
    })
    .unwrap_or(Err(StorageError::Unavailable));

    let (user, saved) = result?;
    state.with_mut(|st| st.sign_in(user.clone(), saved));
    Ok(user)
}

pub fn sign_out(
    mut state: Signal<AppState>,
    store: StoreSlot,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let Some(user) = state.with(|st| st.user.clone()) else {
        return;
    };

    let outcome = with_store(store, |backend| SessionManager::new(backend).logout(&user));
    if let Some(Err(err)) = outcome {
        tracing::error!(uid = %user.id, "failed to clear session: {err}");
        push_toast(toasts, ToastKind::Error, format!("Could not clear saved data: {err}"));
    }

    state.with_mut(|st| st.sign_out());
    push_toast(toasts, ToastKind::Info, "You have been logged out.");
}

/// Saves the estimate on screen for the signed-in user.
pub fn save_current_prediction(
    mut state: Signal<AppState>,
    store: StoreSlot,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let (uid, price) = state.with(|st| (st.user_id().map(str::to_owned), st.predicted_price));
    let Some(price) = price else {
        return;
    };
    let Some(uid) = uid else {
        push_toast(
            toasts,
            ToastKind::Warning,
            "Please log in to save your prediction.",
        );
        return;
    };

    match with_store(store, |backend| PredictionStore::new(backend).save(&uid, price)) {
        Some(Ok(Some(record))) => {
            state.with_mut(|st| st.saved.insert(0, record));
            push_toast(toasts, ToastKind::Success, "Prediction saved to your dashboard.");
        }
        Some(Ok(None)) => {}
        Some(Err(err)) => {
            tracing::error!(%uid, "failed to save prediction: {err}");
            push_toast(toasts, ToastKind::Error, format!("Failed to save prediction: {err}"));
        }
        None => {
            push_toast(toasts, ToastKind::Error, "Storage is unavailable on this device.");
        }
    }
}

pub fn delete_prediction(
    mut state: Signal<AppState>,
    store: StoreSlot,
    toasts: Signal<Vec<ToastMessage>>,
    id: i64,
) {
    let Some(uid) = state.with(|st| st.user_id().map(str::to_owned)) else {
        return;
    };

    let outcome = with_store(store, |backend| {
        let mut predictions = PredictionStore::new(backend);
        predictions.delete_one(&uid, id)?;
        Ok::<_, StorageError>(predictions.list(&uid))
    });

    match outcome {
        Some(Ok(saved)) => {
            state.with_mut(|st| st.saved = saved);
            push_toast(toasts, ToastKind::Success, "Prediction deleted successfully");
        }
        Some(Err(err)) => {
            tracing::error!(%uid, id, "failed to delete prediction: {err}");
            push_toast(toasts, ToastKind::Error, format!("Failed to delete prediction: {err}"));
        }
        None => {}
    }
}

pub fn delete_all_predictions(
    mut state: Signal<AppState>,
    store: StoreSlot,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let Some(uid) = state.with(|st| st.user_id().map(str::to_owned)) else {
        return;
    };

    match with_store(store, |backend| PredictionStore::new(backend).delete_all(&uid)) {
        Some(Ok(())) => {
            state.with_mut(|st| st.saved.clear());
            push_toast(toasts, ToastKind::Success, "All predictions deleted successfully");
        }
        Some(Err(err)) => {
            tracing::error!(%uid, "failed to delete predictions: {err}");
            push_toast(toasts, ToastKind::Error, format!("Failed to delete predictions: {err}"));
        }
        None => {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Login() -> Element {
    rsx! { Shell { LoginPage {} } }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}
