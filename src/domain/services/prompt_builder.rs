use crate::domain::{CareerProfileRequest, ChatMessage};

/// Output schema the recommendation prompt asks the model to follow.
const RECOMMENDATION_SCHEMA: &str = r#"{
    "profile_bullets": [ "string", "string", ... ],
    "recommended_career": "string",
    "roadmap": [ "string", "string", ... ],
    "required_skills": [ "string", "string", ... ],
    "companies": [ { "name": "string", "type": "string" } ],
    "course_guidance": [ { "title": "string", "platform": "string", "link": "string", "paid_or_free": "string" } ],
    "market_value": [ "string", "string", ... ],
    "packages": [ "string", "string", ... ]
}"#;

/// Build the career-guide instruction for a student profile.
///
/// User input is interpolated verbatim; the same profile always yields the same prompt.
pub fn recommendation_prompt(profile: &CareerProfileRequest) -> String {
    format!(
        "\
You are a comprehensive career and skills advisor for Indian college students. \
Your task is to generate a detailed, actionable career guide based on a user's profile.

User Profile:
- Interests: {interests}
- Education: {education}
- Aptitude: {aptitude}

Generate a complete career roadmap including these sections as bullet points (lists), not paragraphs:
1. Personal Profile
2. Academic Background
3. Aptitude & Skills
4. Projects/Achievements (if available)
5. Recommendations for improvement

Also, include these fields as bullet point lists only, without quotes or star symbols:
- packages (named in multiple languages as bullet points)
- market_value (bullet points)
- roadmap (bullet points)

Generate a detailed step-by-step career roadmap with explicit timelines for each step.
Example format for each step:
- \"Month 1-3: Learn Python and SQL basics.\"
- \"Months 4-6: Build projects and gain internship experience.\"

Output the roadmap as a list of strings with timelines included clearly.

For important company names or any key entity, wrap the names with \
<span class='important'>...</span> tags to indicate they need special styling in the frontend.

Output must be a single JSON object with the following schema:

{schema}

Ensure no quotes, stars, or additional symbols decorate the list items.
",
        interests = profile.interests(),
        education = profile.education(),
        aptitude = profile.aptitude(),
        schema = RECOMMENDATION_SCHEMA,
    )
}

/// Build the conversational instruction for a single chat turn.
pub fn chat_prompt(message: &ChatMessage) -> String {
    format!(
        "\
You are a helpful career assistant chatbot. Answer the user's question clearly and simply, \
without any special characters like asterisks (*), bullet points, or quotes.

User: {}
AI:
",
        message.message()
    )
}
