//! Static text blocks printed by the CLI shell.

pub const TITLE_BANNER: &str = r#"
 _               _    __            _
| |__   ___  ___| |_ / _| __ _  ___| |_ ___
| '_ \ / _ \/ __| __| |_ / _` |/ __| __/ __|
| | | | (_) \__ \ |_|  _| (_| | (__| |_\__ \
|_| |_|\___/|___/\__|_|  \__,_|\___|\__|___/
"#;

pub const SYNOPSIS: &str = r#"
    NAME

        hostfacts

    SYNOPSIS

        hostfacts                                           \
            [-h] [--help]                                   \
            [--json]                                        \
            [--man]                                         \
            [--meta]                                        \
            [--savejson <DIR>]                              \
            [-v] [--verbosity]                              \
            [--version]                                     \
            <inputDir>                                      \
            <outputDir>

    BRIEF EXAMPLE

        * Bare bones execution

            hostfacts in/ out/

    DESCRIPTION

        `hostfacts` prints a fixed set of host system facts:
        architecture, machine type, hostname, CPU model list,
        OS family, load average, memory summary and uptime.

    ARGS

        [-h] [--help]
        If specified, show help message and exit.

        [--json]
        If specified, show json representation of app and exit.

        [--man]
        If specified, print (this) man page and exit.

        [--meta]
        If specified, print plugin meta data and exit.

        [--savejson <DIR>]
        If specified, save json representation file to DIR and exit.

        [-v] [--verbosity]
        Verbosity level for app. Affects logging only.

        [--version]
        If specified, print version number and exit.
"#;
