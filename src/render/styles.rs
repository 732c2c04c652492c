//! Inline styles for each element of the page, plus the shared stylesheet.

pub const STYLESHEET: &str = r#"
body { background: linear-gradient(120deg, #181c2f 0%, #232946 100%); color: #f4f4f4; font-family: 'Segoe UI', 'Roboto', Arial, sans-serif; margin: 0; padding: 0; min-height: 100vh; }
input, textarea { background: #232946; color: #f4f4f4; border-color: #444; }
.send-btn {
    background: linear-gradient(90deg, #43cea2 0%, #185a9d 100%);
    color: #fff;
    border: none;
    border-radius: 32px;
    padding: 1.1em 2.7em;
    font-size: 1.25em;
    font-weight: bold;
    box-shadow: 0 4px 16px rgba(24,90,157,0.13);
    cursor: pointer;
    transition: background 0.2s, transform 0.2s, box-shadow 0.2s;
    margin-top: 0.5em;
    letter-spacing: 0.02em;
    width: 100%;
    display: block;
}
.send-btn:hover {
    background: linear-gradient(90deg, #185a9d 0%, #43cea2 100%);
    transform: translateY(-2px) scale(1.04);
    box-shadow: 0 8px 24px rgba(24,90,157,0.18);
}
.form-box, .card-box, .message-card {
    background: #232946;
    color: #f4f4f4;
    border-radius: 24px;
    box-shadow: 0 4px 32px rgba(24,90,157,0.18);
    border: 1px solid #2e3650;
    transition: background 0.3s, color 0.3s, box-shadow 0.3s;
}
@keyframes popBtn {
    0% { transform: scale(0.8); box-shadow: 0 0 0 0 rgba(67,206,162,0.0); }
    60% { transform: scale(1.08); box-shadow: 0 8px 32px 0 rgba(67,206,162,0.18); }
    100% { transform: scale(1); box-shadow: 0 4px 24px 0 rgba(67,206,162,0.15); }
}
"#;

// Entry card
pub const CARD: &str = "padding: 1.5em; margin-bottom: 2em; width: 100%;";
pub const CARD_ROW: &str = "display: flex; align-items: flex-start;";
pub const AVATAR: &str = "background: linear-gradient(135deg, #6a11cb 0%, #2575fc 100%); color: white; width: 56px; height: 56px; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 2em; font-weight: bold; margin-right: 1.5em;";
pub const CARD_TEXT: &str = "flex: 1;";
pub const CARD_NAME: &str = "font-weight: bold; font-size: 1.25em; margin-bottom: 0.2em;";
pub const CARD_MESSAGE: &str = "margin: 0; color: inherit; font-size: 1.1em;";
pub const CARD_TIMESTAMP: &str = "color: #888; font-size: 1em; margin-top: 0.3em;";

// Entry list
pub const ENTRY_LIST: &str = "margin-top: 2.5em; width: 100%;";
pub const ENTRY_LIST_WRAPPER: &str = "width: 100%; max-width: 900px; margin: 0 auto;";

// Header
pub const LOGO: &str = "font-size: 2.2em; font-weight: bold; text-align: center; margin-top: 2em; margin-bottom: 0.3em; background: linear-gradient(90deg, #6a11cb 0%, #2575fc 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent;";
pub const SUBTITLE: &str = "text-align: center; color: #bbb; margin-bottom: 1.5em; font-size: 1.3em; margin-top: 0.2em;";

// Form
pub const FORM_BOX: &str = "padding: 2.5em; width: 100%; max-width: 900px; margin: 0 auto; margin-top: 2.5em;";
pub const FORM: &str = "width: 100%;";
pub const FORM_ROW: &str = "display: flex; width: 100%; align-items: stretch; margin-bottom: 1.5em;";
pub const NAME_INPUT: &str = "flex: 1 1 0; min-width: 0; padding: 1.2em; border-radius: 16px 0 0 16px; border: 1px solid #d0d7de; border-right: none; font-size: 1.1em; background: inherit; color: inherit; height: 60px; box-sizing: border-box;";
pub const MESSAGE_INPUT: &str = "flex: 2 1 0; min-width: 0; padding: 1.2em; border-radius: 0; border: 1px solid #d0d7de; border-left: none; border-right: none; font-size: 1.1em; background: inherit; color: inherit; height: 60px; box-sizing: border-box;";
pub const SEND_BUTTON: &str = "flex: 1 1 0; min-width: 0; height: 60px; border-radius: 0 16px 16px 0; font-size: 1.25em; font-weight: bold; margin: 0; display: flex; align-items: center; justify-content: center; transition: box-shadow 0.2s, transform 0.2s; box-shadow: 0 4px 24px 0 rgba(67,206,162,0.15); animation: popBtn 0.7s cubic-bezier(.68,-0.55,.27,1.55);";

// Footer
pub const CREDIT: &str = "text-align: center; color: #888; font-size: 1.1em; margin-top: 2.5em;";
pub const CREDIT_LINK: &str = "color: #43cea2; font-weight: bold; text-decoration: none;";

pub const CONTENT: &str = "width: 100vw; min-height: 100vh; max-width: 100vw; margin: 0; padding-bottom: 2em;";
