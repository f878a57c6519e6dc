//! Prompt for model-backed resume analysis

/// System message sent with every analysis request.
pub const SYSTEM_PROMPT: &str =
    "You are a career analysis expert. Always respond with valid JSON only.";

const JOB_DESCRIPTION_CHARS: usize = 1000;
const RESUME_CHARS: usize = 3000;

const ANALYSIS_TEMPLATE: &str = r#"You are a Universal Career Consultant with expertise across ALL industries (Technology, Healthcare, Finance, Marketing, Sales, Operations, Education, Green Energy, Manufacturing, etc.).

Analyze the following resume and extract:
1. List of key competencies and skills (technical, soft skills, domain knowledge, certifications, tools, languages)
2. Years of professional experience (estimate if not explicit)
3. The candidate's current professional field/industry (e.g., "Software Development", "Healthcare Administration", "Digital Marketing", "Financial Services")
4. {instruction}
5. For each of the 3 suggested roles, calculate a match percentage (0-100) based on the candidate's skills and experience
6. For each role, identify 3-5 key skill gaps that would help the candidate transition or advance
7. Top 3 learning recommendations with priority (High/Medium/Low), resource name, timeframe, and a one-sentence learning tip
8. List 3-5 trending industries that currently match the candidate's skill set (e.g., "Healthcare Tech", "Renewable Energy", "FinTech", "E-commerce")
9. A 2-sentence professional summary/verdict of the candidate's profile
10. ATS Optimization Feedback: List 3-5 specific tips to improve ATS compatibility (check for: complex formatting, missing contact info, lack of standard section headings like "Experience" or "Skills", missing keywords, tables/graphics, unusual fonts, lack of quantifiable achievements)

Resume:
{resume}

IMPORTANT:
- Suggest roles across ANY industry, not just tech (e.g., Marketing Manager, Sales Director, Operations Lead, Healthcare Administrator, Financial Analyst)
- Be creative and consider lateral moves, promotions, and industry transitions
- Ensure the 3 roles are diverse and represent realistic career paths
- Match percentages should reflect genuine fit based on transferable skills

Return ONLY a valid JSON object with this exact structure:
{
  "skills": ["skill1", "skill2", ...],
  "experience_years": 5.0,
  "current_field": "Field Name",
  "role_matches": {"Role 1": 85.0, "Role 2": 75.0, "Role 3": 65.0},
  "skill_gaps": {"Role 1": ["skill1", "skill2"], "Role 2": [...], "Role 3": [...]},
  "recommendations": [
    {"skill": "Skill Name", "priority": "High", "resource": "Resource Name", "timeframe": "1-2 months", "learning_tip": "Tip here"}
  ],
  "trending_industries": ["Industry 1", "Industry 2", ...],
  "summary": "Two sentence summary here.",
  "ats_feedback": ["Tip 1", "Tip 2", ...]
}"#;

/// Step 4 of the prompt: what the model should do about roles.
pub fn role_instruction(target_role: Option<&str>, job_description: Option<&str>) -> String {
    if let Some(jd) = job_description {
        format!(
            "The user is applying for a SPECIFIC JOB. Act as a Technical Recruiter for this role. \
             Job Description: {}. Calculate match score based ONLY on requirements in this job description. \
             Extract the role title and required skills from the job description.",
            truncate_chars(jd, JOB_DESCRIPTION_CHARS)
        )
    } else if let Some(role) = target_role {
        format!(
            "The user wants to target the role: {}. Include this as one of the 3 suggested roles.",
            role
        )
    } else {
        "Suggest the 3 most logical career next steps for this candidate.".to_string()
    }
}

pub fn build_analysis_prompt(
    resume_text: &str,
    target_role: Option<&str>,
    job_description: Option<&str>,
) -> String {
    ANALYSIS_TEMPLATE
        .replace("{instruction}", &role_instruction(target_role, job_description))
        .replace("{resume}", truncate_chars(resume_text, RESUME_CHARS))
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
