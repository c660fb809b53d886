//! Clipboard
//!
//! Copy helpers with a hidden-textarea fallback for contexts where the
//! Clipboard API is unavailable. Failures surface as toasts, never as
//! uncaught errors.

use leptos::logging::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::dom;
use crate::toast::Toasts;
use crate::url;

/// Copy text, preferring the async Clipboard API in secure contexts
pub async fn copy_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    if window.is_secure_context() {
        match JsFuture::from(window.navigator().clipboard().write_text(text)).await {
            Ok(_) => true,
            Err(err) => {
                error!("Failed to copy: {err:?}");
                false
            }
        }
    } else {
        copy_via_textarea(text)
    }
}

/// execCommand fallback through an off-screen textarea
fn copy_via_textarea(text: &str) -> bool {
    let Some(document) = dom::document() else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(textarea) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
    else {
        return false;
    };

    textarea.set_value(text);
    dom::set_style(&textarea, "position", "fixed");
    dom::set_style(&textarea, "left", "-999999px");
    dom::set_style(&textarea, "top", "-999999px");
    if body.append_child(&textarea).is_err() {
        return false;
    }
    let _ = textarea.focus();
    textarea.select();

    let copied = document
        .unchecked_ref::<web_sys::HtmlDocument>()
        .exec_command("copy")
        .unwrap_or(false);
    textarea.remove();
    copied
}

/// Copy the shareable link for a serifu and report the outcome
pub async fn copy_serifu_url(serifu_id: &str, category_id: &str, toasts: Toasts) -> bool {
    let link = url::serifu_share_url(serifu_id, category_id);
    let copied = copy_text(&link).await;
    if copied {
        toasts.link_copied();
    } else {
        toasts.error(Some("コピーに失敗しました"));
    }
    copied
}
