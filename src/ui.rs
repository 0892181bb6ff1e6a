use relm4::gtk;
use relm4::gtk::glib;

pub mod scrubber;
mod track;

glib::wrapper! {
    pub struct TrackWidget(ObjectSubclass<track::TrackWidget>)
        @extends gtk::Widget;
}
