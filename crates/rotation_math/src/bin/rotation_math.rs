use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand, ValueEnum};
    use rotation_math::{Quaternion, Vector3};

    #[derive(Debug, Parser)]
    #[command(about = "Evaluate vector and quaternion operations", long_about = None)]
    struct Cli {
        /// How to print quaternion results
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Display)]
        format: OutputFormat,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
    enum OutputFormat {
        /// As a sum like `1.0 + 2.0i - 3.0k`
        Display,
        /// As the component list `[s, x, y, z]`
        Components,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Build the rotation quaternion for an angle about an axis
        Build {
            /// Rotation angle in radians
            #[arg(short, long, allow_negative_numbers = true)]
            angle: f64,

            /// Rotation axis as `x,y,z` (used as given, not normalized)
            #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
            axis: Vector3,
        },
        /// Compute the Hamilton product of two quaternions
        Multiply {
            /// Left factor as `s,x,y,z`
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            lhs: Quaternion,

            /// Right factor as `s,x,y,z`
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            rhs: Quaternion,
        },
        /// Compute the conjugate of a quaternion
        Conjugate {
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Compute the inverse of a quaternion
        Inverse {
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Normalize a quaternion
        Normalize {
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Compute the norm of a quaternion
        Norm {
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Compute the rotation angle of a unit quaternion
        Angle {
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Print the vector part of a quaternion
        Axis {
            #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,
        },
        /// Rotate a vector with a quaternion
        Rotate {
            /// Rotation quaternion as `s,x,y,z`
            #[arg(short, long, value_parser = parse_quaternion, allow_hyphen_values = true)]
            quaternion: Quaternion,

            /// Vector to rotate as `x,y,z`
            #[arg(short, long, value_parser = parse_vector, allow_hyphen_values = true)]
            vector: Vector3,
        },
    }

    enum Output {
        Quaternion(Quaternion),
        Vector(Vector3),
        Scalar(f64),
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Executing {:?}", cli.command);

        let output = execute(cli.command);
        println!("{}", render(&output, cli.format));
        Ok(())
    }

    fn execute(command: Command) -> Output {
        match command {
            Command::Build { angle, axis } => {
                Output::Quaternion(Quaternion::from_axis_angle(angle, &axis))
            }
            Command::Multiply { lhs, rhs } => Output::Quaternion(lhs.times(&rhs)),
            Command::Conjugate { quaternion } => Output::Quaternion(quaternion.conjugate()),
            Command::Inverse { quaternion } => {
                log::trace!("Norm of {quaternion:?} is {}", quaternion.norm());
                Output::Quaternion(quaternion.inverse())
            }
            Command::Normalize { quaternion } => {
                log::trace!("Norm of {quaternion:?} is {}", quaternion.norm());
                Output::Quaternion(quaternion.normalized())
            }
            Command::Norm { quaternion } => Output::Scalar(quaternion.norm()),
            Command::Angle { quaternion } => Output::Scalar(quaternion.angle()),
            Command::Axis { quaternion } => Output::Vector(quaternion.axis()),
            Command::Rotate { quaternion, vector } => {
                Output::Vector(quaternion.rotate_vector(&vector))
            }
        }
    }

    fn render(output: &Output, format: OutputFormat) -> String {
        match (output, format) {
            (Output::Quaternion(quaternion), OutputFormat::Display) => quaternion.to_string(),
            (Output::Quaternion(quaternion), OutputFormat::Components) => {
                format!("{:?}", quaternion.components())
            }
            (Output::Vector(vector), _) => vector.to_string(),
            (Output::Scalar(value), _) => format!("{value:?}"),
        }
    }

    fn parse_components<const N: usize>(text: &str) -> Result<[f64; N]> {
        let values = text
            .split(',')
            .map(|entry| {
                let entry = entry.trim();
                entry
                    .parse::<f64>()
                    .with_context(|| format!("Invalid number `{entry}` in `{text}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        let count = values.len();
        match <[f64; N]>::try_from(values) {
            Ok(components) => Ok(components),
            Err(_) => bail!("Expected {N} comma-separated numbers, got {count} in `{text}`"),
        }
    }

    fn parse_vector(text: &str) -> Result<Vector3> {
        let [x, y, z] = parse_components(text)?;
        Ok(Vector3::new(x, y, z))
    }

    fn parse_quaternion(text: &str) -> Result<Quaternion> {
        let [s, x, y, z] = parse_components(text)?;
        Ok(Quaternion::new(s, x, y, z))
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
