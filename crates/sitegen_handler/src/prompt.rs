//! Prompt construction for website generation.

/// System instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "\
You are an expert web developer. Your task is to create beautiful, modern, \
fully working websites from user requests.

Important:
- Generate ONLY code, with no explanations
- Use modern design with gradients, animations, and a responsive layout
- All code must live in a single HTML file (CSS in <style>, JS in <script>)
- Use emoji for icons where appropriate
- Add smooth animations and hover effects
- The code must be ready to open in a browser

If the user asks for information that would need a web search (current \
data, news, facts), use your knowledge to build a realistic example.";

/// Formats the user message embedding the language tag and prompt.
pub fn user_message(language: &str, prompt: &str) -> String {
    format!("Create a {language} website: {prompt}")
}
