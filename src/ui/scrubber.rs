use relm4::gtk;
use relm4::gtk::gdk;
use relm4::gtk::glib;
use relm4::gtk::prelude::{GestureDragExt, GestureExt, WidgetExt};
use relm4::{Component, ComponentParts, ComponentSender};
use tracing::{debug, warn};

use timeline_scrubber::{GesturePhase, ScrubberEvent, TimelineScrubber, Translation};

#[derive(Debug)]
pub struct ScrubberModel {
    scrubber: TimelineScrubber<gdk::RGBA>,
}

#[derive(Debug)]
pub enum ScrubberMsg {
    DragBegin,
    DragUpdate(f64, f64),
    DragEnd,
    DragCancel,
    Confirm,
    FocusChanged(bool),
    SetScrubbingEnabled(bool),
    SetProgress { value: f64, animated: bool },
    Resized,
}

#[derive(Debug)]
pub enum ScrubberOutput {
    ValueChanged { thumb: f64, progress: f64 },
    EditingBegin,
    EditingEnd { progress: f64 },
    ScrubBeyondMinimum,
    ScrubbingToggled(bool),
}

#[relm4::component(pub)]
impl Component for ScrubberModel {
    type CommandOutput = ();
    type Input = ScrubberMsg;
    type Output = ScrubberOutput;
    type Init = TimelineScrubber<gdk::RGBA>;

    view! {
        #[root]
        super::TrackWidget {
            set_hexpand: true,
            set_focusable: true,
            set_focus_on_click: true,

            add_controller = gtk::GestureDrag {
                connect_drag_begin[sender] => move |_, _, _| {
                    sender.input(ScrubberMsg::DragBegin)
                },

                connect_drag_update[sender] => move |_, offset_x, offset_y| {
                    sender.input(ScrubberMsg::DragUpdate(offset_x, offset_y))
                },

                connect_drag_end[sender] => move |_, _, _| {
                    sender.input(ScrubberMsg::DragEnd);
                },

                connect_cancel[sender] => move |_, _| {
                    sender.input(ScrubberMsg::DragCancel);
                },
            },

            add_controller = gtk::GestureClick {
                connect_released[sender] => move |_, _, _, _| {
                    sender.input(ScrubberMsg::Confirm);
                }
            },

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match key {
                        gdk::Key::Return | gdk::Key::KP_Enter | gdk::Key::space => {
                            sender.input(ScrubberMsg::Confirm);
                            glib::Propagation::Stop
                        }
                        _ => glib::Propagation::Proceed,
                    }
                }
            },

            add_controller = gtk::EventControllerFocus {
                connect_enter[sender] => move |_| {
                    sender.input(ScrubberMsg::FocusChanged(true));
                },

                connect_leave[sender] => move |_| {
                    sender.input(ScrubberMsg::FocusChanged(false));
                },
            },
        }
    }

    fn init(
        scrubber: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = ScrubberModel { scrubber };

        let widgets = view_output!();
        root.show_state(&model.scrubber, None);

        let resize_sender = sender.clone();
        root.connect_resized(move || resize_sender.input(ScrubberMsg::Resized));

        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        sender: ComponentSender<Self>,
        track: &Self::Root,
    ) {
        let track_width = track.usable_width();
        let mut animation = None;

        let events = match message {
            ScrubberMsg::DragBegin => {
                track.grab_focus();
                self.scrubber.report_gesture(GesturePhase::Began, track_width)
            }
            ScrubberMsg::DragUpdate(dx, dy) => self
                .scrubber
                .report_gesture(GesturePhase::Changed(Translation::new(dx, dy)), track_width),
            ScrubberMsg::DragEnd => self.scrubber.report_gesture(GesturePhase::Ended, track_width),
            ScrubberMsg::DragCancel => self
                .scrubber
                .report_gesture(GesturePhase::Cancelled, track_width),
            ScrubberMsg::Confirm => self.scrubber.report_confirm(),
            ScrubberMsg::FocusChanged(focused) => {
                if !focused {
                    track.set_preview(None);
                }
                self.scrubber.report_focus(focused)
            }
            ScrubberMsg::SetScrubbingEnabled(enabled) => {
                self.scrubber.set_scrubbing_enabled(enabled);
                if !enabled {
                    track.set_preview(None);
                }
                sender
                    .output(ScrubberOutput::ScrubbingToggled(enabled))
                    .unwrap();
                Vec::new()
            }
            ScrubberMsg::SetProgress { value, animated } => {
                animation = self.scrubber.set_progress_value(value, animated);
                Vec::new()
            }
            ScrubberMsg::Resized => Vec::new(),
        };

        for event in events {
            self.forward_event(event, track, &sender);
        }

        track.show_state(&self.scrubber, animation);
        self.update_view(widgets, sender);
    }
}

impl ScrubberModel {
    fn forward_event(
        &self,
        event: ScrubberEvent,
        track: &super::TrackWidget,
        sender: &ComponentSender<Self>,
    ) {
        let model = self.scrubber.model();

        let output = match event {
            ScrubberEvent::ValueChanged(thumb) => {
                match self.scrubber.preview() {
                    Ok(preview) => track.set_preview(preview),
                    Err(err) => warn!("dropping preview: {err:#}"),
                }

                ScrubberOutput::ValueChanged {
                    thumb,
                    progress: model.progress_value(),
                }
            }
            ScrubberEvent::EditingBegin => ScrubberOutput::EditingBegin,
            ScrubberEvent::EditingEnd => {
                track.set_preview(None);
                ScrubberOutput::EditingEnd {
                    progress: model.progress_value(),
                }
            }
            ScrubberEvent::ScrubBeyondMinimum => ScrubberOutput::ScrubBeyondMinimum,
        };

        debug!(?output, "scrubber output");
        sender.output(output).unwrap();
    }
}
