#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use reviewboard::components::review_edit_modal::ReviewEditModal;
use reviewboard::models::review::{Review, ReviewDraft, ReviewStatus};

wasm_bindgen_test_configure!(run_in_browser);

fn sample_review() -> Review {
    Review {
        id: 11,
        product_label: "Desk lamp".to_string(),
        customer_name: "Alice Carter".to_string(),
        rating: 4,
        comment: "arrived late".to_string(),
        status: ReviewStatus::Pending,
        created_at: None,
        updated_at: None,
    }
}

fn mount_container() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn click(container: &web_sys::Element, selector: &str) {
    let element = container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for selector {selector}"));
    element.unchecked_into::<web_sys::HtmlElement>().click();
}

#[wasm_bindgen_test]
async fn star_click_then_submit_emits_the_draft() {
    let container = mount_container();
    let submitted = Rc::new(RefCell::new(None::<ReviewDraft>));
    let submitted_in = submitted.clone();

    mount_to(container.clone().unchecked_into(), move || {
        let on_submit = Callback::new(move |draft: ReviewDraft| {
            *submitted_in.borrow_mut() = Some(draft);
        });
        let on_close = Callback::new(|_| {});
        view! {
            <ReviewEditModal review=Some(sample_review()) on_submit=on_submit on_close=on_close/>
        }
    });
    sleep(Duration::from_millis(20)).await;

    // Star n sets the rating to exactly n
    click(&container, ".star-button[data-value='2']");
    sleep(Duration::from_millis(10)).await;
    click(&container, "button[type='submit']");
    sleep(Duration::from_millis(10)).await;

    let draft = submitted
        .borrow()
        .clone()
        .expect("submit should emit a draft");
    assert_eq!(draft.rating, 2);
    assert_eq!(draft.comment, "arrived late");
}

#[wasm_bindgen_test]
async fn seeds_defaults_without_a_review() {
    let container = mount_container();
    let submitted = Rc::new(RefCell::new(None::<ReviewDraft>));
    let submitted_in = submitted.clone();

    mount_to(container.clone().unchecked_into(), move || {
        let on_submit = Callback::new(move |draft: ReviewDraft| {
            *submitted_in.borrow_mut() = Some(draft);
        });
        let on_close = Callback::new(|_| {});
        view! {
            <ReviewEditModal on_submit=on_submit on_close=on_close/>
        }
    });
    sleep(Duration::from_millis(20)).await;

    click(&container, "button[type='submit']");
    sleep(Duration::from_millis(10)).await;

    let draft = submitted.borrow().clone().expect("draft expected");
    assert_eq!(draft.rating, 5);
    assert_eq!(draft.comment, "");
}

#[wasm_bindgen_test]
async fn cancel_closes_in_two_phases() {
    let container = mount_container();
    let closed = Rc::new(RefCell::new(false));
    let closed_in = closed.clone();

    mount_to(container.clone().unchecked_into(), move || {
        let on_submit = Callback::new(|_: ReviewDraft| {});
        let on_close = Callback::new(move |_| {
            *closed_in.borrow_mut() = true;
        });
        view! {
            <ReviewEditModal review=Some(sample_review()) on_submit=on_submit on_close=on_close/>
        }
    });
    sleep(Duration::from_millis(20)).await;

    click(&container, ".modal-actions button[type='button']");
    sleep(Duration::from_millis(10)).await;

    // Styling flag flips immediately, the unmount signal comes later
    assert!(container
        .query_selector(".modal-backdrop.closing")
        .unwrap()
        .is_some());
    assert!(!*closed.borrow());

    sleep(Duration::from_millis(300)).await;
    assert!(*closed.borrow());
}
