use crate::motion::builder::{PathBuilder, SequencedMoverBuilder};
use crate::motion::mover::SequencedMover;
use crate::program::ast::{PathStatement, Program};

/// Replay one statement into the builder, advancing the cursor.
pub(crate) fn apply_statement(pb: PathBuilder, statement: &PathStatement) -> PathBuilder {
    match *statement {
        PathStatement::Start { start } => pb.start(start),
        PathStatement::Line { end } => pb.line(end),
        PathStatement::LineContinue { length } => pb.line_continue(length),
        PathStatement::Arc { center, angle } => pb.arc(center, angle),
        PathStatement::ArcContinue { radius, angle } => pb.arc_continue(radius, angle),
        PathStatement::Bezier {
            c1,
            c2,
            end,
            segments,
        } => pb.bezier(c1, c2, end, segments),
        PathStatement::BezierContinue {
            c1_offset,
            c2,
            end,
            segments,
        } => pb.bezier_continue(c1_offset, c2, end, segments),
    }
}

fn replay(mut pb: PathBuilder, statements: &[PathStatement]) -> PathBuilder {
    for statement in statements {
        pb = apply_statement(pb, statement);
    }
    pb
}

impl Program {
    /// Compile the statement tree into a time-evaluable motion.
    ///
    /// This is a pure interpreter over the declarative tree: each mover
    /// statement becomes one easing phase whose path is built by replaying its
    /// path calls through the cursor-threading builder.
    #[tracing::instrument(skip(self), fields(movers = self.movers.len()))]
    pub fn to_sequenced_mover(&self) -> SequencedMover {
        let mut builder = SequencedMoverBuilder::new();
        for statement in &self.movers {
            builder = builder.phase(statement.duration, statement.method.ease(), |pb| {
                replay(pb, &statement.paths)
            });
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::vec2::Vector2;
    use crate::motion::mover::Mover;
    use crate::program::parser::parse;

    #[test]
    fn scenario_a_uniform_unit_line() {
        let program = parse(
            "new MoverBuilder().Uniform(100, e => e.Start(new Vector2(0,0)).Line(new Vector2(1,0)));",
        )
        .unwrap();
        let mover = program.to_sequenced_mover();
        assert_eq!(mover.duration(), 100.0);
        let sample = mover.evaluate(50.0);
        assert_eq!(sample.position, Vector2::new(0.5, 0.0));
        assert_eq!(sample.direction, Vector2::UNIT_X);
        assert!((sample.speed - 0.01).abs() < 1e-12);
    }

    #[test]
    fn wait_holds_position() {
        let program = parse(
            "new MoverBuilder()
               .Uniform(10, e => e.Start(new Vector2(0,0)).Line(new Vector2(2,0)))
               .Wait(5, e => e)
               .Uniform(10, e => e.LineContinue(1));",
        )
        .unwrap();
        let mover = program.to_sequenced_mover();
        assert_eq!(mover.duration(), 25.0);
        // During the wait the position stays where the previous phase ended.
        assert_eq!(mover.evaluate(12.0).position, Vector2::new(2.0, 0.0));
        assert_eq!(mover.evaluate(14.9).position, Vector2::new(2.0, 0.0));
        // The phase after the wait continues from the same cursor.
        assert_eq!(mover.evaluate(25.0).position, Vector2::new(3.0, 0.0));
    }

    #[test]
    fn cursor_threads_across_phases() {
        let program = parse(
            "new MoverBuilder()
               .Uniform(1, e => e.Line(new Vector2(0,1)))
               .Uniform(1, e => e.LineContinue(2));",
        )
        .unwrap();
        let mover = program.to_sequenced_mover();
        assert_eq!(mover.evaluate(2.0).position, Vector2::new(0.0, 3.0));
    }
}
