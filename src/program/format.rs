use std::fmt;

use crate::geometry::vec2::Vector2;
use crate::program::ast::{PathStatement, Program};

const INDENT: &str = "  ";

struct Vec2Literal(Vector2);

impl fmt::Display for Vec2Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "new Vector2({:.3}f, {:.3}f)", self.0.x, self.0.y)
    }
}

fn write_path_statement(out: &mut fmt::Formatter<'_>, statement: &PathStatement) -> fmt::Result {
    match *statement {
        PathStatement::Start { start } => {
            writeln!(out, "{INDENT}{INDENT}.Start({})", Vec2Literal(start))
        }
        PathStatement::Line { end } => {
            writeln!(out, "{INDENT}{INDENT}.Line({})", Vec2Literal(end))
        }
        PathStatement::LineContinue { length } => {
            writeln!(out, "{INDENT}{INDENT}.LineContinue({length:.3}f)")
        }
        PathStatement::Arc { center, angle } => writeln!(
            out,
            "{INDENT}{INDENT}.Arc({}, {angle:.3}f)",
            Vec2Literal(center)
        ),
        PathStatement::ArcContinue { radius, angle } => writeln!(
            out,
            "{INDENT}{INDENT}.ArcContinue({radius:.3}f, {angle:.3}f)"
        ),
        PathStatement::Bezier {
            c1,
            c2,
            end,
            segments,
        } => writeln!(
            out,
            "{INDENT}{INDENT}.Bezier({}, {}, {}, {segments})",
            Vec2Literal(c1),
            Vec2Literal(c2),
            Vec2Literal(end)
        ),
        PathStatement::BezierContinue {
            c1_offset,
            c2,
            end,
            segments,
        } => writeln!(
            out,
            "{INDENT}{INDENT}.BezierContinue({c1_offset:.3}f, {}, {}, {segments})",
            Vec2Literal(c2),
            Vec2Literal(end)
        ),
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "new MoverBuilder()")?;
        for (index, mover) in self.movers.iter().enumerate() {
            writeln!(
                f,
                "{INDENT}.{}({}, e => e",
                mover.method.as_str(),
                mover.duration
            )?;
            for statement in &mover.paths {
                write_path_statement(f, statement)?;
            }
            if index + 1 == self.movers.len() {
                writeln!(f, "{INDENT});")?;
            } else {
                writeln!(f, "{INDENT})")?;
            }
        }
        Ok(())
    }
}

impl Program {
    /// Canonical source form: fixed 3-decimal literals with the `f` unit
    /// suffix, two-space indentation, one statement per line. The output
    /// reparses to an evaluate-equivalent program.
    pub fn to_program_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::program::parser::parse;

    #[test]
    fn canonical_form_is_stable() {
        let program = parse(
            "new MoverBuilder()
               .Uniform(60, e => e .Start(new Vector2(0, 3)) .ArcContinue(1.5, -2))
               .Wait(5, e => e);",
        )
        .unwrap();
        let expected = "new MoverBuilder()\n\
                        \x20 .Uniform(60, e => e\n\
                        \x20   .Start(new Vector2(0.000f, 3.000f))\n\
                        \x20   .ArcContinue(1.500f, -2.000f)\n\
                        \x20 )\n\
                        \x20 .Wait(5, e => e\n\
                        \x20 );\n";
        assert_eq!(program.to_program_string(), expected);
    }

    #[test]
    fn serialization_is_a_fixed_point() {
        let src = "new MoverBuilder().Uniform(10, e => e
            .Line(new Vector2(1,0))
            .Bezier(new Vector2(1,1), new Vector2(2,1), new Vector2(2,0), 32));";
        let once = parse(src).unwrap().to_program_string();
        let twice = parse(&once).unwrap().to_program_string();
        assert_eq!(once, twice);
    }
}
