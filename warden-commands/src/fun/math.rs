use crate::CommandMeta;
use warden_core::{CommandFailure, Context, Error};
use warden_utils::arith::{EvalError, evaluate};

pub const META: CommandMeta = CommandMeta {
    name: "math",
    desc: "Evaluate an arithmetic expression (+ - * / // % ** and parentheses).",
    category: "fun",
    usage: "/math <expression>",
};

pub fn math_reply(expr: &str) -> Result<String, CommandFailure> {
    match evaluate(expr) {
        Ok(value) => Ok(format!("📐 Result: `{value}`")),
        Err(EvalError::DisallowedCharacter(_)) => Err(CommandFailure::rejected(
            "Only numbers and arithmetic operators are allowed.",
        )),
        Err(source) => Err(CommandFailure::rejected(format!(
            "I couldn't evaluate that: {source}"
        ))),
    }
}

/// Evaluate an arithmetic expression
#[poise::command(slash_command, category = "Fun")]
pub async fn math(
    ctx: Context<'_>,
    #[description = "For example (2 + 3) * 4"]
    #[max_length = 256]
    expr: String,
) -> Result<(), Error> {
    let reply = math_reply(&expr)?;
    ctx.say(reply).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::math_reply;

    #[test]
    fn evaluates_simple_sums() {
        assert_eq!(math_reply("2+2").unwrap(), "📐 Result: `4`");
        assert_eq!(math_reply("7 / 2").unwrap(), "📐 Result: `3.5`");
    }

    #[test]
    fn rejects_foreign_characters_before_evaluating() {
        let failure = math_reply("2+2; rm").unwrap_err();
        assert_eq!(
            failure.to_string(),
            "Only numbers and arithmetic operators are allowed."
        );
    }

    #[test]
    fn reports_evaluation_errors() {
        assert_eq!(
            math_reply("1/0").unwrap_err().to_string(),
            "I couldn't evaluate that: division by zero"
        );
        assert!(math_reply(&format!("{}1{}", "(".repeat(40), ")".repeat(40))).is_err());
    }
}
