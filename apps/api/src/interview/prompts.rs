// Interviewer briefs and greetings for the conversational capability.
//
// Known roles get a tailored brief; anything else falls back to a generic
// templated one, so the interviewer persona never receives an empty context.

/// Roles with hand-written interviewer briefs.
fn role_brief(role: &str) -> Option<&'static str> {
    Some(match role {
        "Software Engineer" => {
            "You are conducting a technical interview for a Software Engineer position. \
             Focus on coding skills, problem-solving abilities, system design, and technical \
             experience. Ask about programming languages, frameworks, debugging approaches, \
             and past projects. Be encouraging but thorough in your assessment."
        }
        "Product Manager" => {
            "You are interviewing for a Product Manager role. Focus on product strategy, \
             user experience, data analysis, stakeholder management, and leadership skills. \
             Ask about product launches, metrics, user research, and cross-functional \
             collaboration."
        }
        "Data Scientist" => {
            "You are conducting an interview for a Data Scientist position. Focus on \
             statistical knowledge, machine learning, data analysis, programming skills \
             (Python/R), and business impact. Ask about past projects, model building, data \
             visualization, and statistical methods."
        }
        "UX Designer" => {
            "You are interviewing for a UX Designer role. Focus on design thinking, user \
             research, prototyping, usability testing, and design tools. Ask about design \
             process, user empathy, problem-solving, and portfolio projects."
        }
        "Marketing Manager" => {
            "You are conducting an interview for a Marketing Manager position. Focus on \
             campaign strategy, digital marketing, analytics, brand management, and customer \
             acquisition. Ask about successful campaigns, ROI measurement, and market \
             analysis."
        }
        "Sales Representative" => {
            "You are interviewing for a Sales Representative role. Focus on sales \
             techniques, customer relationship building, negotiation skills, and target \
             achievement. Ask about sales processes, objection handling, and customer \
             success stories."
        }
        "Business Analyst" => {
            "You are conducting an interview for a Business Analyst position. Focus on \
             analytical skills, requirements gathering, process improvement, and stakeholder \
             communication. Ask about data analysis, business process mapping, and project \
             management."
        }
        "DevOps Engineer" => {
            "You are interviewing for a DevOps Engineer role. Focus on infrastructure, \
             automation, CI/CD, cloud platforms, and monitoring. Ask about deployment \
             strategies, infrastructure as code, troubleshooting, and scalability."
        }
        _ => return None,
    })
}

/// Builds the conversational context handed to the interviewer persona.
pub fn interview_context(role: &str, candidate_name: &str, custom_context: Option<&str>) -> String {
    let base = match role_brief(role) {
        Some(brief) => brief.to_string(),
        None => format!(
            "You are conducting a professional interview for a {role} position. Ask \
             relevant questions about their experience, skills, and qualifications for \
             this role."
        ),
    };

    let mut context = format!("{base} The candidate's name is {candidate_name}.");
    if let Some(custom) = custom_context {
        context.push_str(&format!(" Additional context: {custom}"));
    }
    context.push_str(
        " Conduct a thorough but friendly interview, asking follow-up questions based on \
         their responses. Provide constructive feedback and maintain a professional, \
         encouraging tone throughout the conversation. The interview should last \
         approximately 15-30 minutes.",
    );
    context
}

/// Builds the interviewer's opening line.
pub fn custom_greeting(role: &str, candidate_name: &str) -> String {
    match role {
        "Software Engineer" => format!(
            "Hello {candidate_name}! Welcome to your technical interview for the Software \
             Engineer position. I'm excited to learn about your coding experience and \
             problem-solving approach. Are you ready to get started?"
        ),
        "Product Manager" => format!(
            "Hi {candidate_name}! Thanks for joining me today for the Product Manager \
             interview. I'm looking forward to discussing your product strategy experience \
             and how you approach building great products. Shall we begin?"
        ),
        "Data Scientist" => format!(
            "Hello {candidate_name}! Welcome to your Data Scientist interview. I'm eager \
             to hear about your experience with data analysis, machine learning, and how \
             you turn data into actionable insights. Let's dive in!"
        ),
        "UX Designer" => format!(
            "Hi {candidate_name}! Great to meet you for the UX Designer interview. I'm \
             excited to learn about your design process, user research experience, and how \
             you create meaningful user experiences. Ready to start?"
        ),
        "Marketing Manager" => format!(
            "Hello {candidate_name}! Welcome to your Marketing Manager interview. I'm \
             looking forward to discussing your marketing strategies, campaign successes, \
             and how you drive customer engagement. Let's begin!"
        ),
        "Sales Representative" => format!(
            "Hi {candidate_name}! Thanks for joining the Sales Representative interview. \
             I'm excited to hear about your sales experience, relationship-building skills, \
             and how you achieve your targets. Shall we get started?"
        ),
        "Business Analyst" => format!(
            "Hello {candidate_name}! Welcome to your Business Analyst interview. I'm eager \
             to discuss your analytical skills, process improvement experience, and how you \
             bridge business and technical requirements. Ready to begin?"
        ),
        "DevOps Engineer" => format!(
            "Hi {candidate_name}! Great to meet you for the DevOps Engineer interview. I'm \
             looking forward to discussing your infrastructure experience, automation \
             skills, and how you ensure reliable deployments. Let's start!"
        ),
        _ => format!(
            "Hello {candidate_name}! Welcome to your interview for the {role} position. \
             I'm excited to learn more about your experience and qualifications. Let's \
             begin!"
        ),
    }
}

pub fn conversation_name(role: &str, candidate_name: &str) -> String {
    format!("{role} Interview with {candidate_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role_gets_tailored_brief() {
        let context = interview_context("Software Engineer", "Ada", None);
        assert!(context.contains("system design"));
        assert!(context.contains("The candidate's name is Ada."));
    }

    #[test]
    fn test_unknown_role_gets_generic_brief_with_role() {
        let context = interview_context("Underwater Basket Weaver", "Ada", None);
        assert!(context.contains("Underwater Basket Weaver position"));
    }

    #[test]
    fn test_custom_context_appended() {
        let context = interview_context("Data Scientist", "Ada", Some("focus on NLP"));
        assert!(context.contains("Additional context: focus on NLP"));
    }

    #[test]
    fn test_greeting_addresses_candidate() {
        let greeting = custom_greeting("DevOps Engineer", "Grace");
        assert!(greeting.contains("Grace"));
    }

    #[test]
    fn test_unknown_role_greeting_mentions_role() {
        let greeting = custom_greeting("Archivist", "Grace");
        assert!(greeting.contains("Archivist"));
        assert!(greeting.contains("Grace"));
    }
}
