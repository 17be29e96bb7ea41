//! Browser bindings: `CacheStorage`, `fetch`, and the worker event wiring.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise};
use web_sys::{
    Cache, CacheStorage, ExtendableEvent, FetchEvent, Headers, Request, Response, ResponseInit,
    ServiceWorkerGlobalScope, Url,
};

use crate::config::{OfflineResponse, WorkerConfig};
use crate::error::WorkerError;
use crate::filter::{RequestTarget, bypass_reason};
use crate::lifecycle::{CacheStore, Network, Served, activate, install, respond};

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn cache_error(value: JsValue) -> WorkerError {
    WorkerError::Cache(describe(&value))
}

fn cast_error(value: JsValue) -> WorkerError {
    WorkerError::Cast(describe(&value))
}

fn to_js(err: WorkerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

struct BrowserCaches {
    caches: CacheStorage,
}

impl BrowserCaches {
    fn new(scope: &ServiceWorkerGlobalScope) -> Result<Self, WorkerError> {
        let caches = scope
            .caches()
            .map_err(|e| WorkerError::StorageUnavailable(describe(&e)))?;
        Ok(Self { caches })
    }

    async fn open(&self, name: &str) -> Result<Cache, WorkerError> {
        let value = JsFuture::from(self.caches.open(name)).await.map_err(cache_error)?;
        value.dyn_into::<Cache>().map_err(cast_error)
    }
}

impl CacheStore for BrowserCaches {
    type Request = Request;
    type Response = Response;

    async fn cache_names(&self) -> Result<Vec<String>, WorkerError> {
        let value = JsFuture::from(self.caches.keys()).await.map_err(cache_error)?;
        let names = value.dyn_into::<js_sys::Array>().map_err(cast_error)?;
        Ok(names.iter().filter_map(|name| name.as_string()).collect())
    }

    async fn delete_cache(&self, name: &str) -> Result<bool, WorkerError> {
        let value = JsFuture::from(self.caches.delete(name)).await.map_err(cache_error)?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn add_all(&self, cache_name: &str, urls: &[String]) -> Result<(), WorkerError> {
        let cache = self.open(cache_name).await?;
        let list: js_sys::Array = urls.iter().map(|url| JsValue::from_str(url)).collect();
        JsFuture::from(cache.add_all_with_str_sequence(&list))
            .await
            .map_err(cache_error)?;
        Ok(())
    }

    async fn lookup(&self, request: &Request) -> Result<Option<Response>, WorkerError> {
        let value = JsFuture::from(self.caches.match_with_request(request))
            .await
            .map_err(cache_error)?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        value.dyn_into::<Response>().map(Some).map_err(cast_error)
    }
}

struct BrowserNetwork {
    scope: ServiceWorkerGlobalScope,
}

impl Network for BrowserNetwork {
    type Request = Request;
    type Response = Response;

    async fn fetch(&self, request: &Request) -> Result<Response, WorkerError> {
        let value = JsFuture::from(self.scope.fetch_with_request(request))
            .await
            .map_err(|e| WorkerError::Network(describe(&e)))?;
        value.dyn_into::<Response>().map_err(cast_error)
    }
}

fn offline_response(offline: &OfflineResponse) -> Result<Response, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", &offline.content_type)?;
    let init = ResponseInit::new();
    init.set_status(offline.status);
    init.set_status_text(&offline.status_text);
    init.set_headers(&headers);
    Response::new_with_opt_str_and_init(Some(&offline.body), &init)
}

fn request_target(href: &str) -> Option<RequestTarget> {
    match Url::new(href) {
        Ok(url) => Some(RequestTarget::new(url.origin(), url.pathname(), url.href())),
        Err(e) => {
            log::debug!("unparseable request url {href}: {}", describe(&e));
            None
        }
    }
}

fn on_install(scope: ServiceWorkerGlobalScope, config: Rc<WorkerConfig>) -> impl FnMut(&web_sys::Event) {
    move |event| {
        let event: &ExtendableEvent = event.unchecked_ref();
        let scope = scope.clone();
        let config = Rc::clone(&config);
        let promise = future_to_promise(async move {
            let store = BrowserCaches::new(&scope).map_err(to_js)?;
            install(&store, &config).await.map_err(to_js)?;
            Ok(JsValue::UNDEFINED)
        });
        if let Err(e) = event.wait_until(&promise) {
            log::warn!("install waitUntil rejected: {}", describe(&e));
        }
    }
}

fn on_activate(scope: ServiceWorkerGlobalScope, config: Rc<WorkerConfig>) -> impl FnMut(&web_sys::Event) {
    move |event| {
        let event: &ExtendableEvent = event.unchecked_ref();
        let scope = scope.clone();
        let config = Rc::clone(&config);
        let promise = future_to_promise(async move {
            let store = BrowserCaches::new(&scope).map_err(to_js)?;
            let report = activate(&store, &config).await.map_err(to_js)?;
            log::info!("activated {}; removed {} stale caches", config.cache_name, report.deleted.len());
            JsFuture::from(scope.clients().claim()).await?;
            Ok(JsValue::UNDEFINED)
        });
        if let Err(e) = event.wait_until(&promise) {
            log::warn!("activate waitUntil rejected: {}", describe(&e));
        }
    }
}

fn on_fetch(scope: ServiceWorkerGlobalScope, config: Rc<WorkerConfig>) -> impl FnMut(&web_sys::Event) {
    let origin = scope.location().origin();
    move |event| {
        let event: &FetchEvent = event.unchecked_ref();
        let request = event.request();
        let Some(target) = request_target(&request.url()) else {
            return;
        };
        if let Some(reason) = bypass_reason(&target, &origin, &config) {
            log::debug!("bypass {:?}: {}", reason, target.href);
            return;
        }

        let scope = scope.clone();
        let config = Rc::clone(&config);
        let promise = future_to_promise(async move {
            let store = BrowserCaches::new(&scope).map_err(to_js)?;
            let network = BrowserNetwork { scope };
            match respond(&store, &network, &request).await {
                Served::Cache(response) | Served::Network(response) => Ok(response.into()),
                Served::Offline => offline_response(&config.offline).map(Into::into),
            }
        });
        if let Err(e) = event.respond_with(&promise) {
            log::warn!("respondWith rejected: {}", describe(&e));
        }
    }
}

/// Worker entry point: installs logging and registers the lifecycle listeners.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let scope: ServiceWorkerGlobalScope = js_sys::global().unchecked_into();
    let config = Rc::new(WorkerConfig::default());

    EventListener::new(&scope, "install", on_install(scope.clone(), Rc::clone(&config))).forget();
    EventListener::new(&scope, "activate", on_activate(scope.clone(), Rc::clone(&config))).forget();
    EventListener::new(&scope, "fetch", on_fetch(scope.clone(), config)).forget();
}
