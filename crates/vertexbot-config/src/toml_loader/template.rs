//! Default config file template.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Vertexbot Configuration
# Only override what you want to change -- missing fields use defaults.

# Log raw request/response payloads.
# debug = false

[vertexai]
# model = "gemini-pro"        # gemini-* uses chat sessions, others use predict
# project_id = ""             # required for requests; or set VERTEXBOT_PROJECT_ID
# location = "us-central1"
# temperature = 0.0           # 0.0-2.0
# top_p = 0.95                # 0.0-1.0
# top_k = 40                  # 1-40
# max_output_tokens = 1024    # defaults to the model's response budget

[prompt]
# system_message = "You are a highly experienced software engineer. ..."
# reply_for_system_message = "Understood. I will follow these instructions."
# language = "en-US"          # ISO code of the response language
"##
}
