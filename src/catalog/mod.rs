//! The built-in grammar presets. Pure data: the core never depends on how
//! a grammar was selected, only on the [`Grammar`] it converts to.

use crate::grammar::{Grammar, RuleSet};
use compact_str::ToCompactString;
use glam::Vec2;

/// Interpretation starts facing up for every preset.
const INITIAL_HEADING: f32 = 90.0;

/// One catalog entry: a named grammar with its drawing parameters and a
/// human-readable description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemDefinition {
    pub name: &'static str,
    pub axiom: &'static str,
    pub rules: &'static [(char, &'static str)],
    pub angle_degrees: f32,
    pub iterations: u32,
    pub step_length: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub pen_width: f32,
    pub description: &'static str,
}

impl SystemDefinition {
    pub fn grammar(&self) -> Grammar {
        Grammar {
            axiom: self.axiom.to_compact_string(),
            rules: self.rules.iter().copied().collect::<RuleSet>(),
            angle_degrees: self.angle_degrees,
            iterations: self.iterations,
            start: Vec2::new(self.start_x, self.start_y),
            initial_heading: INITIAL_HEADING,
            step_length: self.step_length,
            pen_width: self.pen_width,
        }
    }
}

/// Case-insensitive lookup by preset name.
pub fn find(name: &str) -> Option<&'static SystemDefinition> {
    SYSTEMS
        .iter()
        .find(|system| system.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SYSTEMS.iter().map(|system| system.name)
}

pub const SYSTEMS: &[SystemDefinition] = &[
    SystemDefinition {
        name: "Tree",
        axiom: "F",
        rules: &[('F', "F[-F]F[+F]F")],
        angle_degrees: 25.0,
        iterations: 4,
        step_length: 15.0,
        start_x: 400.0,
        start_y: 600.0,
        pen_width: 2.0,
        description: "A simple tree-like structure where:\n- F: Draw forward\n- [: Save position\n- ]: Restore position\n- +: Turn right\n- -: Turn left",
    },
    SystemDefinition {
        name: "Koch Curve",
        axiom: "F",
        rules: &[('F', "F+F-F-F+F")],
        angle_degrees: 90.0,
        iterations: 3,
        step_length: 5.0,
        start_x: 50.0,
        start_y: 300.0,
        pen_width: 2.0,
        description: "The Koch curve is a fractal curve that creates intricate geometric patterns.\nEach line segment is replaced with four segments in a specific pattern.",
    },
    SystemDefinition {
        name: "Sierpinski Triangle",
        axiom: "F-G-G",
        rules: &[('F', "F-G+F+G-F"), ('G', "GG")],
        angle_degrees: 120.0,
        iterations: 5,
        step_length: 10.0,
        start_x: 400.0,
        start_y: 550.0,
        pen_width: 2.0,
        description: "Creates a famous fractal triangle pattern made up of smaller triangles.\nUses two symbols (F and G) to create the recursive pattern.",
    },
    SystemDefinition {
        name: "Dragon Curve",
        axiom: "FX",
        rules: &[('X', "X+YF+"), ('Y', "-FX-Y")],
        angle_degrees: 90.0,
        iterations: 11,
        step_length: 8.0,
        start_x: 450.0,
        start_y: 250.0,
        pen_width: 2.0,
        description: "A complex curve that resembles a dragon's tail.\nCreates intricate patterns through repeated folding.",
    },
    SystemDefinition {
        name: "Quadratic Koch Island",
        axiom: "F-F-F-F",
        rules: &[('F', "F-F+F+FF-F-F+F")],
        angle_degrees: 90.0,
        iterations: 3,
        step_length: 5.0,
        start_x: 250.0,
        start_y: 450.0,
        pen_width: 2.0,
        description: "A fractal coastline that creates complex shapes through recursively\nreplacing line segments with square-like shapes.\nIt starts as a square.",
    },
    SystemDefinition {
        name: "Plant",
        axiom: "X",
        rules: &[('X', "F+[[X]-X]-F[-FX]+X"), ('F', "FF")],
        angle_degrees: 25.0,
        iterations: 6,
        step_length: 8.0,
        start_x: 400.0,
        start_y: 600.0,
        pen_width: 2.0,
        description: "This rule models a more complex, plant-like growth.\nThe brackets create branching structures,\nand each iteration adds more detail to the branches.\nThe 'X' serves as a placeholder for growth points.",
    },
    SystemDefinition {
        name: "Bush",
        axiom: "F",
        rules: &[('F', "FF+[+F-F-F]-[-F+F+F]")],
        angle_degrees: 22.5,
        iterations: 4,
        step_length: 12.0,
        start_x: 400.0,
        start_y: 600.0,
        pen_width: 2.0,
        description: "Generates a bush-like structure with more consistent branching\non both sides, leading to a fuller shape.\nThe rule expands each segment into more branches,\nwith new branches symmetrically distributed.",
    },
    SystemDefinition {
        name: "Penrose Tiling",
        axiom: "[X]++[X]++[X]++[X]++[X]",
        rules: &[
            ('F', ""),
            ('W', "YF++ZF----XF[-YF----WF]++"),
            ('X', "+YF--ZF[---WF--XF]+"),
            ('Y', "-WF++XF[+++YF++ZF]-"),
            ('Z', "--YF++++WF[+ZF++++XF]--XF"),
        ],
        angle_degrees: 36.0,
        iterations: 5,
        step_length: 25.0,
        start_x: 420.0,
        start_y: 320.0,
        pen_width: 2.0,
        description: "This creates a non-periodic tiling of the plane,\nwhich is a pattern that does not repeat\nby simple translation.\nThe L-system is modified to ensure a non-periodic\nstructure.",
    },
    SystemDefinition {
        name: "Hilbert Curve",
        axiom: "A",
        rules: &[('A', "-BF+AFA+FB-"), ('B', "+AF-BFB-FA+")],
        angle_degrees: 90.0,
        iterations: 5,
        step_length: 15.0,
        start_x: 75.0,
        start_y: 500.0,
        pen_width: 2.0,
        description: "Creates a space-filling curve.\nThis type of curve densely fills the space\nand is used to reduce dimensionality\nwhile preserving locality.\nCan create interesting geometrical figures if a drawing offset is set in each new iteration.",
    },
    SystemDefinition {
        name: "Crystal",
        axiom: "F+F+F+F",
        rules: &[('F', "FF+F++F+F")],
        angle_degrees: 90.0,
        iterations: 3,
        step_length: 20.0,
        start_x: 100.0,
        start_y: 300.0,
        pen_width: 2.0,
        description: "Generates a geometric pattern resembling a crystal with a square base.\nRecursively creates a larger central structure surrounded by smaller, similar shapes.",
    },
    SystemDefinition {
        name: "Gosper Curve (Flowsnake)",
        axiom: "F",
        rules: &[('F', "F-G--G+F++FF+G-"), ('G', "+F-GG--G-F++F+G")],
        angle_degrees: 60.0,
        iterations: 3,
        step_length: 10.0,
        start_x: 400.0,
        start_y: 400.0,
        pen_width: 2.0,
        description: "A variation of the Koch curve that produces a space-filling \"snowflake\" pattern.\nAlso known as the Gosper flowsnake. It creates a loop with hexagonal motifs.",
    },
    SystemDefinition {
        name: "Lace",
        axiom: "W",
        rules: &[('W', "+++X-F-X+++"), ('X', "---W+F+W---")],
        angle_degrees: 30.0,
        iterations: 10,
        step_length: 35.0,
        start_x: 370.0,
        start_y: 350.0,
        pen_width: 4.0,
        description: "Creates a delicate, lace-like fractal pattern using only two very simple rules\nThe pattern consists of interweaving curves that fill the space in an intricate way.",
    },
    SystemDefinition {
        name: "Hexagonal Gosper",
        axiom: "F-F-F-F-F-F",
        rules: &[('F', "F-F++F+F--F--F++")],
        angle_degrees: 60.0,
        iterations: 2,
        step_length: 20.0,
        start_x: 175.0,
        start_y: 380.0,
        pen_width: 2.0,
        description: "Creates a snowflake like curve in which each segment is replaced by\na new one containing some smaller hexagonal structures.\nIf you set the iterations number to 3 you'll see a small black\nhexagonal strcture in the middle.",
    },
    SystemDefinition {
        name: "Board",
        axiom: "F+F+F+F",
        rules: &[('F', "FF+F-F+F+FF")],
        angle_degrees: 90.0,
        iterations: 4,
        step_length: 15.0,
        start_x: 250.0,
        start_y: 500.0,
        pen_width: 2.0,
        description: "Similar to \"Quadratic Koch Island\", but draws more dense figures that give a sense of solidity to the fractal.\nIt starts as a square.",
    },
];
