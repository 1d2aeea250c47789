pub mod auth;
pub mod avatar_dropdown;
pub mod course_card;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod sidebar;
pub mod table;
pub mod toast;

pub use auth::Protected;
pub use avatar_dropdown::AvatarDropDown;
pub use course_card::CourseCard;
pub use footer::Footer;
pub use layout::DashboardShell;
pub use modal::Modal;
pub use navbar::NavBar;
pub use sidebar::Sidebar;
pub use table::{ColumnAlignment, Table, TableColumn};
pub use toast::{use_toast, use_toast_provider, Toast, ToastContext, ToastMessage, ToastType};
