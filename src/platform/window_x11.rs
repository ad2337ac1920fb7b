/// X11 window implementation with Cairo surface.

use crate::core::types::{ClickEvent, KeyEvent};
use std::ffi::CString;
use std::ptr;
use x11::xlib;

pub struct WindowX11 {
    display: *mut xlib::Display,
    window: xlib::Window,
    width: i32,
    height: i32,
    wm_delete_window: xlib::Atom,
    should_close: bool,
    screen: i32,

    // Pending events for external consumption
    pending_clicks: Vec<ClickEvent>,
    pending_key_events: Vec<KeyEvent>,
}

impl WindowX11 {
    pub fn new() -> Self {
        Self {
            display: ptr::null_mut(),
            window: 0,
            width: 0,
            height: 0,
            wm_delete_window: 0,
            should_close: false,
            screen: 0,
            pending_clicks: Vec::new(),
            pending_key_events: Vec::new(),
        }
    }

    pub fn create(&mut self, width: i32, height: i32, title: &str) -> bool {
        unsafe {
            self.display = xlib::XOpenDisplay(ptr::null());
            if self.display.is_null() {
                eprintln!("Failed to open X11 display");
                return false;
            }

            self.screen = xlib::XDefaultScreen(self.display);
            let root = xlib::XRootWindow(self.display, self.screen);

            self.window = xlib::XCreateSimpleWindow(
                self.display,
                root,
                0,
                0,
                width as u32,
                height as u32,
                0,
                xlib::XBlackPixel(self.display, self.screen),
                xlib::XBlackPixel(self.display, self.screen),
            );

            self.width = width;
            self.height = height;

            // Set window title
            let title_c = CString::new(title).unwrap();
            xlib::XStoreName(self.display, self.window, title_c.as_ptr());

            // Select events
            xlib::XSelectInput(
                self.display,
                self.window,
                xlib::ExposureMask
                    | xlib::ButtonPressMask
                    | xlib::KeyPressMask
                    | xlib::KeyReleaseMask
                    | xlib::StructureNotifyMask,
            );

            // WM_DELETE_WINDOW protocol
            let wm_delete = CString::new("WM_DELETE_WINDOW").unwrap();
            self.wm_delete_window =
                xlib::XInternAtom(self.display, wm_delete.as_ptr(), xlib::False);
            xlib::XSetWMProtocols(
                self.display,
                self.window,
                &mut self.wm_delete_window as *mut _,
                1,
            );

            xlib::XMapWindow(self.display, self.window);
            xlib::XFlush(self.display);

            true
        }
    }

    /// Create a Cairo context for the current window using cairo-sys FFI.
    pub fn create_cairo_context(&self) -> Option<cairo::Context> {
        unsafe {
            let visual = xlib::XDefaultVisual(self.display, self.screen);

            let surface_ptr = cairo_sys::cairo_xlib_surface_create(
                self.display,
                self.window,
                visual,
                self.width,
                self.height,
            );

            if surface_ptr.is_null() {
                return None;
            }

            let cr_ptr = cairo_sys::cairo_create(surface_ptr);
            // Surface is now referenced by the context, release our ref
            cairo_sys::cairo_surface_destroy(surface_ptr);

            if cr_ptr.is_null() {
                return None;
            }

            // Wrap the raw pointer in cairo-rs Context (takes ownership)
            Some(cairo::Context::from_raw_full(cr_ptr))
        }
    }

    /// Process pending X11 events. Returns false if window should close.
    pub fn poll_events(&mut self) -> bool {
        if self.should_close {
            return false;
        }

        self.pending_clicks.clear();
        self.pending_key_events.clear();

        unsafe {
            while xlib::XPending(self.display) > 0 {
                let mut event: xlib::XEvent = std::mem::zeroed();
                xlib::XNextEvent(self.display, &mut event);

                match event.get_type() {
                    xlib::Expose => {}
                    xlib::ButtonPress => {
                        let btn = event.button;
                        // Buttons 4/5 are scroll wheel; the widget only reacts to clicks
                        if btn.button < 4 {
                            self.pending_clicks.push(ClickEvent {
                                x: btn.x as f64,
                                y: btn.y as f64,
                                button: btn.button as u8,
                            });
                        }
                    }
                    xlib::KeyPress | xlib::KeyRelease => {
                        let key = event.key;
                        self.pending_key_events.push(KeyEvent {
                            keycode: key.keycode,
                            pressed: event.get_type() == xlib::KeyPress,
                            ctrl: key.state & xlib::ControlMask != 0,
                        });
                    }
                    xlib::ConfigureNotify => {
                        let configure = event.configure;
                        if configure.width != self.width || configure.height != self.height {
                            self.width = configure.width;
                            self.height = configure.height;
                        }
                    }
                    xlib::ClientMessage => {
                        let cm = event.client_message;
                        if cm.data.get_long(0) as xlib::Atom == self.wm_delete_window {
                            self.should_close = true;
                            return false;
                        }
                    }
                    _ => {}
                }
            }
        }

        !self.should_close
    }

    /// Drain pending click events.
    pub fn take_clicks(&mut self) -> Vec<ClickEvent> {
        std::mem::take(&mut self.pending_clicks)
    }

    /// Drain pending key events.
    pub fn take_key_events(&mut self) -> Vec<KeyEvent> {
        std::mem::take(&mut self.pending_key_events)
    }

    pub fn flush(&self) {
        unsafe {
            xlib::XFlush(self.display);
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Drop for WindowX11 {
    fn drop(&mut self) {
        unsafe {
            if !self.display.is_null() {
                xlib::XDestroyWindow(self.display, self.window);
                xlib::XCloseDisplay(self.display);
            }
        }
    }
}
