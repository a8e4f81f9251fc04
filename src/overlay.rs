use crate::constants::*;
use crate::dom;
use web_sys as web;

#[inline]
pub fn show_configurator(document: &web::Document) {
    dom::set_visible(document, CONFIGURATOR_ROOT_ID, true);
}

#[inline]
pub fn hide_configurator(document: &web::Document) {
    dom::set_visible(document, CONFIGURATOR_ROOT_ID, false);
}

/// Purchase confirmation dialog; `body` is the product and summary text.
pub fn show_confirm(document: &web::Document, body: &str) {
    dom::set_text(document, CONFIRM_BODY_ID, body);
    dom::set_visible(document, CONFIRM_OVERLAY_ID, true);
}

#[inline]
pub fn hide_confirm(document: &web::Document) {
    dom::set_visible(document, CONFIRM_OVERLAY_ID, false);
}

#[inline]
pub fn is_confirm_open(document: &web::Document) -> bool {
    dom::is_visible(document, CONFIRM_OVERLAY_ID)
}

pub fn show_notice(document: &web::Document, body: &str) {
    dom::set_text(document, NOTICE_BODY_ID, body);
    dom::set_visible(document, NOTICE_OVERLAY_ID, true);
}

#[inline]
pub fn hide_notice(document: &web::Document) {
    dom::set_visible(document, NOTICE_OVERLAY_ID, false);
}

#[inline]
pub fn is_notice_open(document: &web::Document) -> bool {
    dom::is_visible(document, NOTICE_OVERLAY_ID)
}
