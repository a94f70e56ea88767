use super::portal;
use super::UseModal;
use crate::utils::{
    close_from_backdrop, compose_backdrop_style, compose_dialog_style, route_click, MountPhase,
    PortalMount, Style, Surface, SurfaceOptions,
};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Extra handlers for one surface, run after the built-in ones
#[derive(Clone, Copy, PartialEq, Default)]
pub struct SurfaceEvents {
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub onmousedown: Option<EventHandler<MouseEvent>>,
    pub onmouseup: Option<EventHandler<MouseEvent>>,
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
    pub onpointerdown: Option<EventHandler<PointerEvent>>,
    pub onpointerup: Option<EventHandler<PointerEvent>>,
    pub onpointermove: Option<EventHandler<PointerEvent>>,
    pub onwheel: Option<EventHandler<WheelEvent>>,
    pub onfocus: Option<EventHandler<FocusEvent>>,
    pub onblur: Option<EventHandler<FocusEvent>>,
    pub onkeydown: Option<EventHandler<KeyboardEvent>>,
    pub onkeyup: Option<EventHandler<KeyboardEvent>>,
}

fn forward<T: 'static>(handler: Option<EventHandler<T>>) -> impl FnMut(T) + 'static {
    move |evt| {
        if let Some(handler) = handler {
            handler.call(evt);
        }
    }
}

#[component]
pub fn Modal(
    modal: UseModal,
    children: Element,
    /// Called instead of the controller's close on backdrop clicks
    close_modal: Option<EventHandler<()>>,
    style_backdrop: Option<Style>,
    style_modal: Option<Style>,
    class_name_backdrop: Option<String>,
    class_name_modal: Option<String>,
    #[props(default)] events_backdrop: SurfaceEvents,
    #[props(default)] events_modal: SurfaceEvents,
) -> Element {
    let is_active = modal.is_modal_active();
    let is_visible = modal.is_modal_visible();
    let div_id = modal.div_id().to_string();
    let document = modal.controller().environment().document().clone();

    let mount = use_hook(|| Rc::new(RefCell::new(PortalMount::new(div_id.clone()))));
    let mut revision = use_signal(|| 0u64);

    // Mount synchronization, after every render that saw `active` change
    let effect_modal = modal.clone();
    let effect_mount = mount.clone();
    let effect_document = document.clone();
    use_effect(move || {
        let active = effect_modal.is_modal_active();
        let mut mount = effect_mount.borrow_mut();
        if mount.observe(active) == MountPhase::Unmounting {
            portal::detach(mount.div_id());
        }
        if mount.sync(&*effect_document) {
            *revision.write() += 1;
        }
    });

    let drop_mount = mount.clone();
    use_drop(move || {
        let mut mount = drop_mount.borrow_mut();
        portal::detach(mount.div_id());
        mount.teardown(&*document);
    });

    // Subscribe to mount changes made by the effect
    let _ = revision();
    let gate_open = mount.borrow().should_render(is_active);

    let backdrop = SurfaceOptions {
        style: style_backdrop,
        class: class_name_backdrop,
    };
    let dialog = SurfaceOptions {
        style: style_modal,
        class: class_name_modal,
    };
    let backdrop_style = compose_backdrop_style(&backdrop, modal.transition(), is_visible).to_css();
    let dialog_style = compose_dialog_style(&dialog).to_css();
    let backdrop_class = backdrop.class_attr();
    let dialog_class = dialog.class_attr();

    let close_target = modal.clone();
    let close = move || {
        close_from_backdrop(
            close_modal.map(|handler| move || handler.call(())),
            close_target.controller(),
        )
    };
    let attach_id = div_id.clone();

    rsx! {
        div {
            "data-modal-anchor": "{div_id}",
            style: "display: contents",

            if gate_open {
                // Backdrop
                div {
                    style: "{backdrop_style}",
                    class: "{backdrop_class}",
                    onmounted: move |_| portal::attach(&attach_id),
                    onclick: move |evt: MouseEvent| {
                        route_click(
                            Surface::Backdrop,
                            || evt.stop_propagation(),
                            &close,
                            || forward(events_backdrop.onclick)(evt.clone()),
                        );
                    },
                    onmousedown: forward(events_backdrop.onmousedown),
                    onmouseup: forward(events_backdrop.onmouseup),
                    onmouseenter: forward(events_backdrop.onmouseenter),
                    onmouseleave: forward(events_backdrop.onmouseleave),
                    onpointerdown: forward(events_backdrop.onpointerdown),
                    onpointerup: forward(events_backdrop.onpointerup),
                    onpointermove: forward(events_backdrop.onpointermove),
                    onwheel: forward(events_backdrop.onwheel),
                    onfocus: forward(events_backdrop.onfocus),
                    onblur: forward(events_backdrop.onblur),
                    onkeydown: forward(events_backdrop.onkeydown),
                    onkeyup: forward(events_backdrop.onkeyup),

                    // Dialog - stop propagation so clicking inside doesn't close
                    div {
                        style: "{dialog_style}",
                        class: "{dialog_class}",
                        onclick: move |evt: MouseEvent| {
                            route_click(
                                Surface::Dialog,
                                || evt.stop_propagation(),
                                || {},
                                || forward(events_modal.onclick)(evt.clone()),
                            );
                        },
                        onmousedown: forward(events_modal.onmousedown),
                        onmouseup: forward(events_modal.onmouseup),
                        onmouseenter: forward(events_modal.onmouseenter),
                        onmouseleave: forward(events_modal.onmouseleave),
                        onpointerdown: forward(events_modal.onpointerdown),
                        onpointerup: forward(events_modal.onpointerup),
                        onpointermove: forward(events_modal.onpointermove),
                        onwheel: forward(events_modal.onwheel),
                        onfocus: forward(events_modal.onfocus),
                        onblur: forward(events_modal.onblur),
                        onkeydown: forward(events_modal.onkeydown),
                        onkeyup: forward(events_modal.onkeyup),

                        {children}
                    }
                }
            }
        }
    }
}

