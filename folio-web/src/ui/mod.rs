mod app;
pub use app::App;

mod comment_form;
pub use comment_form::CommentForm;

mod comment_list;
pub use comment_list::CommentList;

mod icon_tray;
pub use icon_tray::IconTray;
