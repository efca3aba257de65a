//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Wonokerso chatbot configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
url = "https://api.ryzumi.vip/api/ai/chatgpt"
# question_param = "text"
# prompt_param = "prompt"
# session_param = "sessionId"   # "" to stop sending the session id
# connect_timeout_secs = 10      # 1-120
# request_timeout_secs = 0       # 0 = wait forever, max 600

[knowledge]
# File path or http(s) URL of a {"key": "fact"} JSON document.
source = "data.json"

[prompt]
# style = "bulleted"             # bulleted | key_value
# heading = "Informasi Desa Wonokerso:"

[reveal]
# enabled = true
# char_delay_ms = 50             # 0-1000

[display]
# title = "Chat with Wonokerso Bot"
# bot_name = "Wonokerso Bot"
# user_name = "You"
# empty_text = "No messages yet. Ask about Desa Wonokerso!"

[logging]
# level = "info"                 # trace | debug | info | warn | error
"##
    .to_string()
}
