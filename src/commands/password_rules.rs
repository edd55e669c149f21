//! Password rules command implementation

use crate::password::render_password_requirements;

pub fn handle_password_rules() {
    print!("{}", render_password_requirements());
}
