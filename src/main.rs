//! Yes or Yes entry point
//!
//! On wasm: grabs the page elements, wires the evasion triggers and the
//! accept handler, and drives the celebration frame loop. On native: runs
//! the whole interaction headlessly against a synthetic viewport.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, CanvasRenderingContext2d, Document, Element, FocusEvent,
        HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent, Window,
    };

    use yes_or_yes::Settings;
    use yes_or_yes::consts::FOCUS_MOVE_DELAY_MS;
    use yes_or_yes::sim::{
        Acceptance, ConfettiBurst, EvasionController, PlacementQuery, Rect, spawn_hearts,
    };

    /// Handles to every element the page mutates
    #[derive(Clone)]
    struct Dom {
        card: HtmlElement,
        feedback: HtmlElement,
        buttons_wrap: HtmlElement,
        btn_yes: HtmlElement,
        btn_no: HtmlElement,
        only_yes: HtmlElement,
        success: HtmlElement,
        hearts: HtmlElement,
        confetti: HtmlCanvasElement,
    }

    impl Dom {
        /// Resolve every required element up front; a missing one is a setup
        /// defect, not a runtime condition
        fn grab(document: &Document) -> Self {
            fn element(document: &Document, id: &str) -> HtmlElement {
                document
                    .get_element_by_id(id)
                    .unwrap_or_else(|| panic!("missing #{id}"))
                    .dyn_into()
                    .unwrap_or_else(|_| panic!("#{id} is not an html element"))
            }

            Self {
                card: element(document, "card"),
                feedback: element(document, "feedback"),
                buttons_wrap: element(document, "buttons-wrap"),
                btn_yes: element(document, "btn-yes"),
                btn_no: element(document, "btn-no"),
                only_yes: element(document, "only-yes"),
                success: element(document, "success"),
                hearts: element(document, "hearts"),
                confetti: document
                    .get_element_by_id("confetti")
                    .expect("missing #confetti")
                    .dyn_into()
                    .expect("#confetti is not a canvas"),
            }
        }
    }

    /// Page state: all of it lives here, shared by the event closures
    struct App {
        controller: EvasionController,
        acceptance: Acceptance,
        settings: Settings,
        rng: Pcg32,
        dom: Dom,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Yes or Yes starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::detect();
        if settings.reduced_motion {
            log::info!("Reduced motion requested; celebration effects disabled");
        }

        let dom = Dom::grab(&document);
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            controller: EvasionController::new(settings.reduced_motion),
            acceptance: Acceptance::new(),
            settings,
            rng: Pcg32::seed_from_u64(seed),
            dom,
        }));

        setup_decline_handlers(&window, app.clone());
        setup_accept_handler(app);

        log::info!("Yes or Yes running!");
    }

    fn viewport(window: &Window) -> Vec2 {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Vec2::new(w as f32, h as f32)
    }

    fn rect_of(el: &Element) -> Rect {
        let r = el.get_bounding_client_rect();
        Rect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        )
    }

    /// One evasion: snapshot the layout, ask the controller, apply the outcome
    fn evade(app: &Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let mut app = app.borrow_mut();
        let app = &mut *app;

        let layout = PlacementQuery {
            viewport: viewport(&window),
            decline_size: rect_of(&app.dom.btn_no).size(),
            card: rect_of(&app.dom.card),
            accept: rect_of(&app.dom.btn_yes),
        };
        let Some(outcome) = app.controller.on_evade(&mut app.rng, &layout) else {
            return;
        };

        if outcome.switch_to_free_layout {
            let _ = app.dom.buttons_wrap.class_list().add_1("card__buttons--runaway");
        }
        let style = app.dom.btn_no.style();
        let _ = style.set_property("left", &format!("{}px", outcome.position.x));
        let _ = style.set_property("top", &format!("{}px", outcome.position.y));
        let _ = style.set_property("right", "auto");
        let _ = style.set_property("bottom", "auto");

        app.dom.feedback.set_text_content(Some(outcome.feedback));
        app.dom.btn_yes.set_text_content(Some(outcome.accept_label));
        let _ = app
            .dom
            .btn_yes
            .style()
            .set_property("transform", &format!("scale({})", outcome.accept_scale));

        if outcome.limit_reached {
            let _ = app.dom.btn_no.set_attribute("hidden", "hidden");
            let _ = app.dom.only_yes.remove_attribute("hidden");
            app.dom.feedback.set_text_content(Some(""));
        }
    }

    fn setup_decline_handlers(window: &Window, app: Rc<RefCell<App>>) {
        let btn_no = app.borrow().dom.btn_no.clone();

        // Pointer hover
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                evade(&app);
            });
            let _ = btn_no
                .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch, registered non-passive so the emulated click can be suppressed
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                evade(&app);
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = btn_no.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Keyboard focus: flee only if focus is still sitting here after the
        // delay, so tabbing straight through doesn't trigger a move
        {
            let app = app.clone();
            let window = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                let app = app.clone();
                defer_check(&window, FOCUS_MOVE_DELAY_MS, move || {
                    if decline_still_focused(&app) {
                        evade(&app);
                    }
                });
            });
            let _ =
                btn_no.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn decline_still_focused(app: &Rc<RefCell<App>>) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let app = app.borrow();
        document
            .active_element()
            .is_some_and(|active| app.dom.btn_no.is_same_node(Some(active.as_ref())))
    }

    /// Run `check` after a fixed delay. No cancellation: the callee
    /// re-verifies current state, so a stale firing is a no-op.
    fn defer_check(window: &Window, delay_ms: i32, check: impl FnOnce() + 'static) {
        let closure = Closure::once(check);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }

    fn setup_accept_handler(app: Rc<RefCell<App>>) {
        let btn_yes = app.borrow().dom.btn_yes.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            on_accept(&app);
        });
        let _ = btn_yes.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_accept(app: &Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        let plan = {
            let mut app = app.borrow_mut();
            let app = &mut *app;
            let decline_hidden = app.dom.btn_no.has_attribute("hidden");
            let Some(plan) = app
                .acceptance
                .accept(app.settings.reduced_motion, decline_hidden)
            else {
                return;
            };

            let _ = app.dom.btn_yes.set_attribute("disabled", "disabled");
            if plan.disable_decline {
                let _ = app.dom.btn_no.set_attribute("disabled", "disabled");
            }
            let _ = app.dom.card.set_attribute("aria-hidden", "true");
            let _ = app.dom.success.remove_attribute("hidden");
            let _ = app.dom.success.set_attribute("aria-hidden", "false");

            log::info!(
                "Accepted after {} escapes 🎉",
                app.controller.escape_count()
            );
            plan
        };

        if plan.celebrate {
            run_confetti(app, &window);
            add_floating_hearts(app);
        }
    }

    fn run_confetti(app: &Rc<RefCell<App>>, window: &Window) {
        let size = viewport(window);
        let (canvas, ctx, burst) = {
            let mut app = app.borrow_mut();
            let app = &mut *app;
            let canvas = app.dom.confetti.clone();
            canvas.set_width(size.x as u32);
            canvas.set_height(size.y as u32);
            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .expect("no 2d context")
                .dyn_into::<CanvasRenderingContext2d>()
                .expect("not a 2d context");
            let burst = ConfettiBurst::spawn(&mut app.rng, size.x, size.y);
            (canvas, ctx, burst)
        };
        confetti_frame(canvas, ctx, burst);
    }

    /// Step and draw the burst, rescheduling until it settles
    fn confetti_frame(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, mut burst: ConfettiBurst) {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        burst.step();
        for piece in burst.pieces() {
            ctx.save();
            let _ = ctx.translate(piece.pos.x as f64, piece.pos.y as f64);
            let _ = ctx.rotate((piece.rotation as f64).to_radians());
            ctx.set_fill_style_str(piece.color);
            ctx.fill_rect(
                (-piece.size / 2.0) as f64,
                (-piece.size / 2.0) as f64,
                piece.size as f64,
                piece.size as f64,
            );
            ctx.restore();
        }
        if !burst.settled() {
            request_animation_frame(move |_time| confetti_frame(canvas, ctx, burst));
        }
    }

    fn request_animation_frame(f: impl FnOnce(f64) + 'static) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(f);
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn add_floating_hearts(app: &Rc<RefCell<App>>) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");
        let mut app = app.borrow_mut();
        let app = &mut *app;

        for heart in spawn_hearts(&mut app.rng) {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_class_name("heart-float");
            span.set_text_content(Some(heart.symbol));
            if let Ok(span) = span.dyn_into::<HtmlElement>() {
                let style = span.style();
                let _ = style.set_property("left", &format!("{}%", heart.left_pct));
                let _ = style.set_property("top", &format!("{}%", heart.top_pct));
                let _ = style.set_property("animation-delay", &format!("{}s", heart.delay_secs));
                let _ = app.dom.hearts.append_child(&span);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use yes_or_yes::Settings;
    use yes_or_yes::sim::{
        Acceptance, ConfettiBurst, EvasionController, PlacementQuery, Rect, spawn_hearts,
    };

    env_logger::init();
    log::info!("Yes or Yes (native) starting...");
    log::info!("Headless run - serve with `trunk serve` for the web version");

    // Synthetic 1280x800 viewport with the card centered
    let layout = PlacementQuery {
        viewport: Vec2::new(1280.0, 800.0),
        decline_size: Vec2::new(120.0, 48.0),
        card: Rect::new(440.0, 250.0, 400.0, 300.0),
        accept: Rect::new(470.0, 460.0, 140.0, 52.0),
    };

    let settings = Settings::detect();
    let mut rng = Pcg32::seed_from_u64(0x5e5);
    let mut controller = EvasionController::new(settings.reduced_motion);

    while let Some(outcome) = controller.on_evade(&mut rng, &layout) {
        log::info!(
            "escape {:>2}: no -> ({:>6.1}, {:>5.1})  yes x{:.2}  \"{}\"",
            controller.escape_count(),
            outcome.position.x,
            outcome.position.y,
            outcome.accept_scale,
            outcome.feedback,
        );
    }

    let mut acceptance = Acceptance::new();
    let plan = acceptance
        .accept(settings.reduced_motion, true)
        .expect("first acceptance");

    let mut frames = 0;
    if plan.celebrate {
        let mut burst = ConfettiBurst::spawn(&mut rng, layout.viewport.x, layout.viewport.y);
        while !burst.settled() {
            burst.step();
            frames += 1;
        }
        let hearts = spawn_hearts(&mut rng);
        log::info!("{} hearts floating", hearts.len());
    }

    println!(
        "✓ {} escapes, accepted, confetti settled after {} frames",
        controller.escape_count(),
        frames
    );
}
