use std::time::Duration;

use relm4::gtk::glib;
use relm4::gtk::prelude::{ApplicationExt, ButtonExt, GtkWindowExt, OrientableExt, WidgetExt};
use relm4::{
    adw, gtk, main_application, Component, ComponentController, ComponentParts, ComponentSender,
    Controller, RelmWidgetExt,
};
use tracing::info;

use crate::ui::scrubber::{ScrubberModel, ScrubberMsg, ScrubberOutput};
use relm4::gtk::gdk;
use timeline_scrubber::{Range, TimelineScrubber};

static PLAYBACK_TICK: Duration = Duration::from_millis(60);

pub(super) struct App {
    scrubber: Controller<ScrubberModel>,
    scrubbing_enabled: bool,
    thumb: f64,
    progress: f64,
    range: Range,
    playback_step: Option<f64>,
}

pub(super) struct AppInit {
    pub scrubber: TimelineScrubber<gdk::RGBA>,
    /// Progress advanced per playback tick. `None` keeps progress still.
    pub playback_step: Option<f64>,
}

#[derive(Debug)]
pub(super) enum AppMsg {
    ToggleScrubbing,
    Restart,
    Scrubber(ScrubberOutput),
    Quit,
}

#[derive(Debug)]
pub(super) enum AppCmdMsg {
    PlaybackTick,
}

#[relm4::component(pub)]
impl Component for App {
    type CommandOutput = AppCmdMsg;
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        main_window = adw::ApplicationWindow::new(&main_application()) {
            set_visible: true,
            set_default_height: 320,
            set_default_width: 720,

            connect_close_request[sender] => move |_| {
                sender.input(AppMsg::Quit);
                glib::Propagation::Stop
            },

            adw::ToolbarView {
                add_top_bar = &adw::HeaderBar {},

                #[wrap(Some)]
                set_content = &gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 20,
                    set_margin_all: 24,

                    gtk::Box {
                        set_spacing: 10,

                        gtk::Label {
                            set_hexpand: true,
                            set_halign: gtk::Align::Start,
                            #[watch]
                            set_label: if model.scrubbing_enabled {
                                "scrubbing enabled"
                            } else {
                                "scrubbing disabled"
                            },
                        },

                        gtk::Button {
                            add_css_class: "raised",
                            set_label: "Restart",
                            connect_clicked => AppMsg::Restart,
                        },

                        gtk::Button {
                            add_css_class: "raised",
                            set_label: "Toggle scrubbing",
                            connect_clicked => AppMsg::ToggleScrubbing,
                        },
                    },

                    model.scrubber.widget(),

                    gtk::Box {
                        set_spacing: 10,
                        set_homogeneous: true,

                        gtk::Label {
                            add_css_class: "monospace",
                            #[watch]
                            set_label: &format!("thumb {:.3}", model.thumb),
                        },

                        gtk::Label {
                            set_css_classes: &["monospace", "dim-label"],
                            #[watch]
                            set_label: &format!("current {:.3}", model.progress),
                        },
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            scrubber,
            playback_step,
        } = init;

        let thumb = scrubber.model().thumb_value();
        let progress = scrubber.model().progress_value();
        let range = scrubber.model().range();
        let scrubbing_enabled = scrubber.model().is_scrubbing_enabled();

        let scrubber = ScrubberModel::builder()
            .launch(scrubber)
            .forward(sender.input_sender(), AppMsg::Scrubber);

        let model = Self {
            scrubber,
            scrubbing_enabled,
            thumb,
            progress,
            range,
            playback_step,
        };

        let widgets = view_output!();

        if model.playback_step.is_some() {
            sender.command(|out, shutdown| {
                shutdown
                    .register(async move {
                        loop {
                            tokio::time::sleep(PLAYBACK_TICK).await;
                            if out.send(AppCmdMsg::PlaybackTick).is_err() {
                                break;
                            }
                        }
                    })
                    .drop_on_shutdown()
            });
        }

        ComponentParts { model, widgets }
    }

    fn update(
        &mut self,
        message: Self::Input,
        _sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            AppMsg::ToggleScrubbing => {
                self.scrubber
                    .emit(ScrubberMsg::SetScrubbingEnabled(!self.scrubbing_enabled));
            }
            AppMsg::Restart => {
                self.progress = self.range.min;
                self.scrubber.emit(ScrubberMsg::SetProgress {
                    value: self.progress,
                    animated: true,
                });
            }
            AppMsg::Scrubber(output) => self.handle_scrubber_output(output),
            AppMsg::Quit => main_application().quit(),
        }
    }

    fn update_cmd(
        &mut self,
        message: Self::CommandOutput,
        _sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            AppCmdMsg::PlaybackTick => {
                let Some(step) = self.playback_step else {
                    return;
                };

                if self.progress >= self.range.max {
                    return;
                }

                self.progress = (self.progress + step).min(self.range.max);
                self.scrubber.emit(ScrubberMsg::SetProgress {
                    value: self.progress,
                    animated: false,
                });
            }
        }
    }
}

impl App {
    fn handle_scrubber_output(&mut self, output: ScrubberOutput) {
        match output {
            ScrubberOutput::ValueChanged { thumb, progress } => {
                self.thumb = thumb;
                self.progress = progress;
            }
            ScrubberOutput::EditingBegin => info!("begin editing"),
            ScrubberOutput::EditingEnd { progress } => {
                info!(progress, "end editing");
                self.progress = progress;
                self.thumb = progress;
                self.scrubber.emit(ScrubberMsg::SetScrubbingEnabled(false));
            }
            ScrubberOutput::ScrubBeyondMinimum => info!("trying to scrub beyond minimum"),
            ScrubberOutput::ScrubbingToggled(enabled) => {
                self.scrubbing_enabled = enabled;
            }
        }
    }
}
